//! Turn free-run offsets into wall-clock bookable slots.
//!
//! Each day's resources are decoded, tiled with `free_run_starts`, and every
//! tile start becomes a [`Slot`] at `day start + offset * time unit`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::codec::prepare;
use crate::config::SlotConfig;
use crate::day::DayRecord;
use crate::error::{Result, SlotError};
use crate::scan::free_run_starts;

/// A bookable slot for one service on one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub resource_id: String,
    pub service_id: String,
    pub start: DateTime<Utc>,
    /// Service duration in minutes.
    pub duration: u32,
}

/// Parse a day date: an RFC 3339 timestamp, or a plain `YYYY-MM-DD` taken as
/// midnight UTC.
pub fn parse_day_start(date: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SlotError::InvalidDate(date.to_string()))
}

/// Materialize slots for `service_id` from every non-excluded resource of
/// every day.
///
/// Only tiles starting at or after `start_minute` are produced. Unlike
/// workload aggregation, a malformed bitset or date fails the whole call.
pub fn make_slots(
    days: &[DayRecord],
    start_minute: u32,
    service_id: &str,
    duration_minutes: u32,
    config: &SlotConfig,
) -> Result<Vec<Slot>> {
    let unit = config.time_unit;
    let offset = unit.minutes_to_units_floor(start_minute);
    let tile = config.tile_units();

    let mut slots = Vec::new();
    for day in days {
        let date = day
            .date
            .as_deref()
            .ok_or_else(|| SlotError::InvalidDate("missing day date".to_string()))?;
        let day_start = parse_day_start(date)?;

        for resource in day.active_resources() {
            let vector = prepare(&resource.bitset, unit)?;
            let starts = free_run_starts(&vector, tile, offset);
            debug!(resource_id = %resource.resource_id, date, slots = starts.len(), "tiled day");
            slots.extend(starts.into_iter().map(|bit| Slot {
                resource_id: resource.resource_id.clone(),
                service_id: service_id.to_string(),
                start: day_start + Duration::minutes(i64::from(unit.units_to_minutes(bit))),
                duration: duration_minutes,
            }));
        }
    }
    Ok(slots)
}
