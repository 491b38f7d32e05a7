use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::time_parser;

use super::{Course, Gender, StandardType, Stroke};

/// One qualifying-time entry of a standard set: the threshold for a single
/// (stroke, distance, gender, age band) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardRow {
    pub row_id: Uuid,
    pub stroke: Stroke,
    pub distance_m: u32,
    pub gender: Gender,
    pub standard_type: StandardType,
    /// Pool the threshold time is defined in.
    pub pool_of_standard: Course,
    pub time_seconds: Decimal,
    /// Inclusive age band; `None` on either end means unbounded.
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
}

impl StandardRow {
    pub fn applies_to_age(&self, age: i32) -> bool {
        self.age_min.is_none_or(|min| age >= min) && self.age_max.is_none_or(|max| age <= max)
    }

    /// Human label for the age band, e.g. "13-14", "15+", "Under 12", "Open".
    pub fn age_group(&self) -> String {
        match (self.age_min, self.age_max) {
            (Some(min), Some(max)) if min == max => min.to_string(),
            (Some(min), Some(max)) => format!("{}-{}", min, max),
            (Some(min), None) => format!("{}+", min),
            (None, Some(max)) => format!("Under {}", max),
            (None, None) => "Open".to_string(),
        }
    }

    pub fn qualifying_time(&self) -> String {
        time_parser::format(self.time_seconds)
    }
}
