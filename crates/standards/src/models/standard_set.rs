use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ConversionRule, Course, StandardRow, Stroke};

/// How a standard set determines the age a swimmer competes at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeRule {
    /// Age as of a fixed date printed in the meet conditions.
    AgeAtDate { date: NaiveDate },
    /// Age at the end of the calendar year (Dec 31 of the season year).
    CalendarYear,
}

/// A meet's qualifying standards: the time thresholds plus the window and
/// conversion policy they are applied under. Read-only from the evaluator's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardSet {
    pub set_id: Uuid,
    pub name: String,
    pub season: Option<i32>,
    /// Pool the meet is swum in; `None` means either course is accepted.
    pub pool_required: Option<Course>,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    pub age_rule: AgeRule,
    pub standards: Vec<StandardRow>,
    pub rule: Option<ConversionRule>,
}

impl StandardSet {
    /// The date swimmer ages are computed against. For calendar-year rules
    /// this is Dec 31 of the season year, falling back to the window-end
    /// year and finally to the current year.
    pub fn age_reference_date(&self, today: NaiveDate) -> NaiveDate {
        match self.age_rule {
            AgeRule::AgeAtDate { date } => date,
            AgeRule::CalendarYear => {
                let year = self
                    .season
                    .or_else(|| self.window_end.map(|d| d.year()))
                    .unwrap_or_else(|| today.year());
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today)
            }
        }
    }

    /// Whether a performance date falls inside the qualifying window. Only
    /// enforced when both bounds are present.
    pub fn in_window(&self, date: NaiveDate) -> bool {
        match (self.window_start, self.window_end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            _ => true,
        }
    }

    /// A set counts as upcoming when its window has not yet closed.
    /// Open-ended windows never close.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.window_end.is_none_or(|end| end >= today)
    }

    /// Distinct (stroke, distance) events this set defines standards for.
    pub fn events(&self) -> Vec<(Stroke, u32)> {
        let mut events: Vec<(Stroke, u32)> = Vec::new();
        for row in &self.standards {
            let key = (row.stroke, row.distance_m);
            if !events.contains(&key) {
                events.push(key);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, StandardType, Stroke};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(age_rule: AgeRule, season: Option<i32>, window_end: Option<NaiveDate>) -> StandardSet {
        StandardSet {
            set_id: Uuid::new_v4(),
            name: "Regional Champs".to_string(),
            season,
            pool_required: Some(Course::Lc),
            window_start: Some(date(2025, 1, 1)),
            window_end,
            age_rule,
            standards: Vec::new(),
            rule: None,
        }
    }

    #[test]
    fn test_age_reference_date_fixed() {
        let s = set(
            AgeRule::AgeAtDate {
                date: date(2025, 6, 15),
            },
            Some(2025),
            Some(date(2025, 5, 1)),
        );
        assert_eq!(s.age_reference_date(date(2024, 1, 1)), date(2025, 6, 15));
    }

    #[test]
    fn test_age_reference_date_calendar_year_uses_season() {
        let s = set(AgeRule::CalendarYear, Some(2026), Some(date(2025, 5, 1)));
        assert_eq!(s.age_reference_date(date(2025, 1, 1)), date(2026, 12, 31));
    }

    #[test]
    fn test_age_reference_date_falls_back_to_window_end() {
        let s = set(AgeRule::CalendarYear, None, Some(date(2025, 5, 1)));
        assert_eq!(s.age_reference_date(date(2024, 1, 1)), date(2025, 12, 31));
    }

    #[test]
    fn test_age_reference_date_falls_back_to_today() {
        let s = set(AgeRule::CalendarYear, None, None);
        assert_eq!(s.age_reference_date(date(2024, 3, 1)), date(2024, 12, 31));
    }

    #[test]
    fn test_in_window() {
        let s = set(AgeRule::CalendarYear, None, Some(date(2025, 5, 1)));
        assert!(s.in_window(date(2025, 3, 1)));
        assert!(!s.in_window(date(2025, 5, 2)));
        assert!(!s.in_window(date(2024, 12, 31)));

        // Open-ended window accepts everything
        let open = set(AgeRule::CalendarYear, None, None);
        assert!(open.in_window(date(1999, 1, 1)));
    }

    #[test]
    fn test_is_future() {
        let s = set(AgeRule::CalendarYear, None, Some(date(2025, 5, 1)));
        assert!(s.is_future(date(2025, 5, 1)));
        assert!(!s.is_future(date(2025, 5, 2)));
        assert!(set(AgeRule::CalendarYear, None, None).is_future(date(2030, 1, 1)));
    }

    #[test]
    fn test_events_are_distinct() {
        let mut s = set(AgeRule::CalendarYear, None, None);
        let mk = |stroke, distance_m, standard_type| StandardRow {
            row_id: Uuid::new_v4(),
            stroke,
            distance_m,
            gender: Gender::M,
            standard_type,
            pool_of_standard: Course::Lc,
            time_seconds: "60.00".parse().unwrap(),
            age_min: None,
            age_max: None,
        };
        s.standards.push(mk(Stroke::Free, 100, StandardType::Qualify));
        s.standards.push(mk(Stroke::Free, 100, StandardType::Consider));
        s.standards.push(mk(Stroke::Back, 200, StandardType::Qualify));
        assert_eq!(s.events(), vec![(Stroke::Free, 100), (Stroke::Back, 200)]);
    }
}
