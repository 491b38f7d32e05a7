use serde::{Deserialize, Serialize};

use super::Course;

/// Per-meet conversion policy: which cross-course conversions are accepted
/// for entry times, and the minimum license level a performance needs to
/// count at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRule {
    pub allow_sc_to_lc: bool,
    pub allow_lc_to_sc: bool,
    pub min_license_level: Option<i32>,
}

impl ConversionRule {
    pub fn conversion_allowed(&self, from: Course, to: Course) -> bool {
        if from == to {
            return true;
        }
        match (from, to) {
            (Course::Sc, Course::Lc) => self.allow_sc_to_lc,
            (Course::Lc, Course::Sc) => self.allow_lc_to_sc,
            _ => false,
        }
    }

    pub fn license_level_valid(&self, level: Option<i32>) -> bool {
        match self.min_license_level {
            None => true,
            Some(min) => level.is_some_and(|l| l >= min),
        }
    }
}
