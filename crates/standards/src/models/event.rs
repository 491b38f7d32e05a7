use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

/// Distances (in meters) sanctioned for standard events.
pub const DISTANCES_M: [u32; 6] = [50, 100, 200, 400, 800, 1500];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stroke {
    Free,
    Back,
    Breast,
    Fly,
    Im,
}

impl Stroke {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stroke::Free => "FREE",
            Stroke::Back => "BACK",
            Stroke::Breast => "BREAST",
            Stroke::Fly => "FLY",
            Stroke::Im => "IM",
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stroke {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FREE" => Ok(Stroke::Free),
            "BACK" => Ok(Stroke::Back),
            "BREAST" => Ok(Stroke::Breast),
            "FLY" => Ok(Stroke::Fly),
            "IM" => Ok(Stroke::Im),
            other => Err(StandardsError::UnknownStroke(other.to_string())),
        }
    }
}

/// Pool course: LC is a 50m pool, SC a 25m pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Course {
    Lc,
    Sc,
}

impl Course {
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Lc => "LC",
            Course::Sc => "SC",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LC" => Ok(Course::Lc),
            "SC" => Ok(Course::Sc),
            other => Err(StandardsError::UnknownCourse(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::M => f.write_str("M"),
            Gender::F => f.write_str("F"),
        }
    }
}

impl FromStr for Gender {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            other => Err(StandardsError::UnknownGender(other.to_string())),
        }
    }
}

/// Kind of threshold a standard row defines: the hard qualifying time, or the
/// looser discretionary "under consideration" time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StandardType {
    Qualify,
    Consider,
}

pub fn is_valid_distance(distance_m: u32) -> bool {
    DISTANCES_M.contains(&distance_m)
}
