pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, StandardsError};
pub use models::{
    AgeRule, ConversionRule, Course, Gender, NewPerformance, Performance, StandardRow, StandardSet,
    StandardType, Stroke, Swimmer,
};
pub use services::eligibility::{EligibilityCheck, EligibilityResult, Provenance};
pub use services::qualification::{
    CandidateProfile, MeetCheckResult, MeetQualification, QualifiedEvent, check_all_meets,
    future_qualifications,
};
