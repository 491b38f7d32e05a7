use chrono::NaiveDate;
use serde::Deserialize;

/// A race record as scraped from a results provider, before any
/// normalization. Stroke, course and time are free text at this point.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPerformance {
    pub stroke: String,
    pub distance_m: u32,
    pub course_type: String,
    pub time_str: String,
    pub date: NaiveDate,
    pub meet_name: String,
    pub license_level: Option<i32>,
    pub source_url: Option<String>,
}
