use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Course, Gender, Performance, StandardSet, StandardType, Stroke, Swimmer};

use super::eligibility::EligibilityCheck;
use super::{equivalent_time, round2, standard_lookup, time_parser};

/// Ad-hoc swimmer profile with a single candidate time, for the public
/// "would this time qualify anywhere" checker. No persisted swimmer needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub dob: NaiveDate,
    pub gender: Gender,
    pub stroke: Stroke,
    pub distance_m: u32,
    pub time_seconds: Decimal,
    pub course: Course,
}

/// One meet's verdict for a candidate time, shaped for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetCheckResult {
    pub meet_name: String,
    pub qualified: bool,
    pub consideration: bool,
    pub swimmer_time: String,
    pub required_time: Option<String>,
    pub delta: Option<Decimal>,
    pub age_group: Option<String>,
    pub conversion_note: Option<String>,
}

impl MeetCheckResult {
    fn status_priority(&self) -> u8 {
        if self.qualified {
            0
        } else if self.consideration {
            1
        } else {
            2
        }
    }
}

/// Evaluate one candidate time against every known standard set. Meets with
/// no applicable standard, or where the needed course conversion is
/// disallowed, are omitted. Results come back qualified first, then
/// consideration, then the rest, closest misses first within each group.
pub fn check_all_meets(
    profile: &CandidateProfile,
    sets: &[StandardSet],
    today: NaiveDate,
) -> Vec<MeetCheckResult> {
    let mut results: Vec<MeetCheckResult> = sets
        .iter()
        .filter_map(|set| check_against_meet(profile, set, today))
        .collect();

    results.sort_by_key(|r| (r.status_priority(), r.delta.unwrap_or(Decimal::MAX)));
    results
}

fn check_against_meet(
    profile: &CandidateProfile,
    set: &StandardSet,
    today: NaiveDate,
) -> Option<MeetCheckResult> {
    let age_reference_date = set.age_reference_date(today);
    let age = crate::models::age_on(age_reference_date, profile.dob);

    let row_q = standard_lookup::find(
        &set.standards,
        profile.stroke,
        profile.distance_m,
        profile.gender,
        StandardType::Qualify,
        age,
    );
    let row_c = standard_lookup::find(
        &set.standards,
        profile.stroke,
        profile.distance_m,
        profile.gender,
        StandardType::Consider,
        age,
    );

    if row_q.is_none() && row_c.is_none() {
        return None;
    }

    let swimmer_time = time_for_pool(profile, set)?;

    let required_time = row_q.map(|r| r.time_seconds);
    let consideration_time = row_c.map(|r| r.time_seconds);

    let qualified = required_time.is_some_and(|r| swimmer_time <= r);
    let consideration = !qualified && consideration_time.is_some_and(|c| swimmer_time <= c);
    let delta = required_time.map(|r| round2(swimmer_time - r));

    let age_group = row_q.or(row_c).map(|row| row.age_group());

    let conversion_note = match set.pool_required {
        Some(required) if profile.course != required => Some(format!(
            "Time converted from {} to {} ({} \u{2192} {})",
            profile.course,
            required,
            time_parser::format(profile.time_seconds),
            time_parser::format(swimmer_time)
        )),
        _ => None,
    };

    Some(MeetCheckResult {
        meet_name: set.name.clone(),
        qualified,
        consideration,
        swimmer_time: time_parser::format(swimmer_time),
        required_time: required_time.map(time_parser::format),
        delta,
        age_group,
        conversion_note,
    })
}

/// The candidate time expressed in the meet's pool, or `None` when the
/// required conversion is not allowed for this meet.
fn time_for_pool(profile: &CandidateProfile, set: &StandardSet) -> Option<Decimal> {
    let required = match set.pool_required {
        Some(required) => required,
        None => return Some(profile.time_seconds),
    };

    if profile.course == required {
        return Some(profile.time_seconds);
    }

    let allowed = set
        .rule
        .as_ref()
        .is_some_and(|rule| rule.conversion_allowed(profile.course, required));
    if !allowed {
        return None;
    }

    Some(equivalent_time::convert(
        profile.stroke,
        profile.distance_m,
        profile.course,
        required,
        profile.time_seconds,
    ))
}

/// One event a swimmer already holds a qualifying time for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedEvent {
    pub stroke: Stroke,
    pub distance_m: u32,
    pub best_time: Decimal,
    pub best_course: Course,
    pub conversion_used: bool,
    pub required: Decimal,
    pub delta_to_qualify: Decimal,
}

/// Per-meet qualification report for one swimmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetQualification {
    pub set_id: uuid::Uuid,
    pub meet_name: String,
    pub qualified_count: usize,
    pub events: Vec<QualifiedEvent>,
}

/// Scan upcoming meets (window still open as of `today`) and report, per
/// meet, every event the swimmer already has a qualifying time for. Meets
/// without a single qualification are omitted. Each (meet, event) evaluation
/// is independent, so callers may fan this out in parallel if they wish.
pub fn future_qualifications(
    swimmer: &Swimmer,
    performances: &[Performance],
    sets: &[StandardSet],
    today: NaiveDate,
) -> Vec<MeetQualification> {
    let mut reports = Vec::new();

    for set in sets.iter().filter(|set| set.is_future(today)) {
        let check = EligibilityCheck::new(swimmer, performances, set, None, None, today);

        let events: Vec<QualifiedEvent> = set
            .events()
            .into_iter()
            .filter_map(|(stroke, distance_m)| {
                let result = check.check(stroke, distance_m)?;
                if !result.qualified {
                    return None;
                }
                Some(QualifiedEvent {
                    stroke,
                    distance_m,
                    best_time: result.best_time,
                    best_course: result.best_course,
                    conversion_used: result.conversion_used,
                    required: result.required?,
                    delta_to_qualify: result.delta_to_qualify?,
                })
            })
            .collect();

        if !events.is_empty() {
            reports.push(MeetQualification {
                set_id: set.set_id,
                meet_name: set.name.clone(),
                qualified_count: events.len(),
                events,
            });
        }
    }

    reports
}
