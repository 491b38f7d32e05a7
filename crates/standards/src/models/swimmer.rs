use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Gender;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swimmer {
    pub swimmer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// National federation membership id, when the swimmer is registered.
    pub membership_id: Option<String>,
    pub dob: NaiveDate,
    pub gender: Gender,
}

impl Swimmer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age on a reference date. Day-of-year ordinal comparison: the birthday
    /// counts as reached once the reference date's day-of-year is at or past
    /// the birth day-of-year, regardless of leap years.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        age_on(date, self.dob)
    }
}

pub fn age_on(date: NaiveDate, dob: NaiveDate) -> i32 {
    let mut age = date.year() - dob.year();
    if date.ordinal() < dob.ordinal() {
        age -= 1;
    }
    age
}
