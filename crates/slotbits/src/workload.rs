//! Workload weights: how much free time each resource has across days.
//!
//! A resource's weight is the number of free bits in all of its day-vectors.
//! Sorting by weight orders resources from most to least loaded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codec::prepare;
use crate::config::TimeUnit;
use crate::day::{DayRecord, ResourceBitset};
use crate::scan::find_first_one;
use crate::vector::DayVector;

/// Aggregated workload of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadWeight {
    pub resource_id: String,
    /// Total free bits across all days.
    pub weight: u64,
    /// Date of the first day, in input order, with any free time.
    pub first_free_date: Option<String>,
    /// First free minute on `first_free_date`.
    pub first_free_minute: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
struct ResourceDay {
    ones: u32,
    first_free_minute: Option<u32>,
}

fn summarize(day: &DayRecord, resource: &ResourceBitset, time_unit: TimeUnit) -> ResourceDay {
    let vector = prepare(&resource.bitset, time_unit).unwrap_or_else(|err| {
        warn!(
            resource_id = %resource.resource_id,
            date = ?day.date,
            error = %err,
            "malformed bitset, counting resource as busy"
        );
        DayVector::busy(time_unit)
    });
    ResourceDay {
        ones: vector.count_ones(),
        first_free_minute: find_first_one(&vector, 0).map(|bit| time_unit.units_to_minutes(bit)),
    }
}

/// Compute workload weights for every non-excluded resource in `days`.
///
/// Results are in order of each resource's first appearance. A bitset that
/// fails to decode counts as fully busy for that resource on that day rather
/// than failing the batch. The first free date/minute, once found, is never
/// replaced by a later day.
pub fn workload_weights(days: &[DayRecord], time_unit: TimeUnit) -> Vec<WorkloadWeight> {
    let entries: Vec<(&DayRecord, &ResourceBitset)> = days
        .iter()
        .flat_map(|day| day.active_resources().map(move |r| (day, r)))
        .collect();

    #[cfg(feature = "parallel")]
    let summaries: Vec<ResourceDay> = {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map(|(day, resource)| summarize(day, resource, time_unit))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let summaries: Vec<ResourceDay> = entries
        .iter()
        .map(|(day, resource)| summarize(day, resource, time_unit))
        .collect();

    let mut weights: Vec<WorkloadWeight> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for ((day, resource), summary) in entries.iter().zip(summaries) {
        let slot = *index.entry(resource.resource_id.as_str()).or_insert_with(|| {
            weights.push(WorkloadWeight {
                resource_id: resource.resource_id.clone(),
                weight: 0,
                first_free_date: None,
                first_free_minute: None,
            });
            weights.len() - 1
        });
        let entry = &mut weights[slot];
        entry.weight += u64::from(summary.ones);
        if entry.first_free_minute.is_none() && summary.first_free_minute.is_some() {
            entry.first_free_date = day.date.clone();
            entry.first_free_minute = summary.first_free_minute;
        }
    }

    debug!(
        days = days.len(),
        resources = weights.len(),
        "computed workload weights"
    );
    weights
}
