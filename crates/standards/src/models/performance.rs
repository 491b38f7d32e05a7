use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StandardsError};
use crate::services::time_converter;
use crate::services::time_parser;

use super::event::is_valid_distance;
use super::{Course, Stroke};

/// A recorded race result for one swimmer. Immutable once created; the
/// LC/SC equivalent times are derived once at construction and never
/// recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: Uuid,
    pub swimmer_id: Uuid,
    pub stroke: Stroke,
    pub distance_m: u32,
    pub course: Course,
    pub time_seconds: Decimal,
    /// Time expressed in a 50m pool (native or estimated).
    pub lc_time_seconds: Decimal,
    /// Time expressed in a 25m pool (native or estimated).
    pub sc_time_seconds: Decimal,
    pub date: NaiveDate,
    pub meet_name: String,
    pub license_level: Option<i32>,
    pub source_url: Option<String>,
    /// Raw time text as it appeared at the source, kept for audit.
    pub original_time_str: Option<String>,
}

/// Input for creating a performance, before the dual-time derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPerformance {
    pub swimmer_id: Uuid,
    pub stroke: Stroke,
    pub distance_m: u32,
    pub course: Course,
    pub time_seconds: Decimal,
    pub date: NaiveDate,
    pub meet_name: String,
    pub license_level: Option<i32>,
    pub source_url: Option<String>,
    pub original_time_str: Option<String>,
}

impl Performance {
    pub fn create(new: NewPerformance) -> Result<Self> {
        if !is_valid_distance(new.distance_m) {
            return Err(StandardsError::Validation(format!(
                "distance_m {} is not a sanctioned distance",
                new.distance_m
            )));
        }
        if new.time_seconds < Decimal::ZERO {
            return Err(StandardsError::Validation(
                "time_seconds must be non-negative".to_string(),
            ));
        }

        let dual = time_converter::derive_dual_times(
            new.time_seconds,
            new.distance_m,
            new.stroke,
            new.course,
        );

        Ok(Performance {
            performance_id: Uuid::new_v4(),
            swimmer_id: new.swimmer_id,
            stroke: new.stroke,
            distance_m: new.distance_m,
            course: new.course,
            time_seconds: new.time_seconds,
            lc_time_seconds: dual.lc,
            sc_time_seconds: dual.sc,
            date: new.date,
            meet_name: new.meet_name,
            license_level: new.license_level,
            source_url: new.source_url,
            original_time_str: new.original_time_str,
        })
    }

    /// Display form, always re-derived from `time_seconds` rather than the
    /// original text (the original may have been corrected during import).
    pub fn time_formatted(&self) -> String {
        time_parser::format(self.time_seconds)
    }
}
