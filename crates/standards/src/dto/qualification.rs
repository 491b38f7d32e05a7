use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::{Result, StandardsError};
use crate::models::is_valid_distance;
use crate::services::qualification::CandidateProfile;
use crate::services::time_parser;

/// Raw public-checker form input, exactly as it arrives from an untrusted
/// client. Parsed into a [`CandidateProfile`]; anything malformed surfaces
/// as an error rather than defaulting.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QualificationCheckRequest {
    #[validate(length(min = 1, message = "dob is required"))]
    pub dob: String,
    #[validate(length(min = 1, message = "sex is required"))]
    pub sex: String,
    #[validate(length(min = 1, message = "stroke is required"))]
    pub stroke: String,
    pub distance_m: u32,
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
}

impl QualificationCheckRequest {
    pub fn into_profile(self) -> Result<CandidateProfile> {
        self.validate()?;

        let dob = NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
            .map_err(|_| StandardsError::InvalidDate(self.dob.clone()))?;

        if !is_valid_distance(self.distance_m) {
            return Err(StandardsError::Validation(format!(
                "distance_m {} is not a sanctioned distance",
                self.distance_m
            )));
        }

        let time_seconds = time_parser::parse(&self.time, Some(self.distance_m))?
            .ok_or_else(|| StandardsError::InvalidTime(self.time.clone()))?;

        Ok(CandidateProfile {
            dob,
            gender: self.sex.parse()?,
            stroke: self.stroke.parse()?,
            distance_m: self.distance_m,
            time_seconds,
            course: self.course.parse()?,
        })
    }
}
