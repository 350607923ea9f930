//! Day records: per-day resource bitsets as delivered by the schedule backend.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vector::BitsetInput;

/// One resource's bitset for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBitset {
    pub resource_id: String,
    pub bitset: BitsetInput,
}

/// All resources' bitsets for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// Start of the day, RFC 3339 or `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceBitset>,
    /// Resources present in `resources` that must be ignored for this day.
    #[serde(default)]
    pub excluded_resources: Vec<String>,
}

impl DayRecord {
    /// Resources not listed in `excluded_resources`, in input order.
    pub fn active_resources(&self) -> impl Iterator<Item = &ResourceBitset> {
        self.resources
            .iter()
            .filter(|r| !self.excluded_resources.contains(&r.resource_id))
    }
}

/// Parse a JSON array of day records.
pub fn parse_days(json: &str) -> Result<Vec<DayRecord>> {
    Ok(serde_json::from_str(json)?)
}
