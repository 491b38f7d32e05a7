mod conversion_rule;
mod event;
mod performance;
mod standard_row;
mod standard_set;
mod swimmer;

pub use conversion_rule::ConversionRule;
pub use event::{Course, DISTANCES_M, Gender, StandardType, Stroke, is_valid_distance};
pub use performance::{NewPerformance, Performance};
pub use standard_row::StandardRow;
pub use standard_set::{AgeRule, StandardSet};
pub use swimmer::{Swimmer, age_on};
