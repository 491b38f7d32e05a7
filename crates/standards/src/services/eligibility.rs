use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    ConversionRule, Course, Performance, StandardSet, StandardType, Stroke, Swimmer,
};

use super::{equivalent_time, round2, standard_lookup};

/// Where a candidate time came from, kept for audit and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    pub meet_name: String,
    pub date: NaiveDate,
    pub source_url: Option<String>,
    pub original_course: Course,
    pub original_time: Decimal,
}

/// Outcome of checking one swimmer against one event of one standard set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub best_time: Decimal,
    pub best_course: Course,
    pub conversion_used: bool,
    pub license_level: Option<i32>,
    pub provenance: Provenance,
    /// QUALIFY threshold, when one applies to this swimmer.
    pub required: Option<Decimal>,
    /// CONSIDER threshold, when one applies to this swimmer.
    pub consider: Option<Decimal>,
    /// best_time − required, negative when under the qualifying time.
    pub delta_to_qualify: Option<Decimal>,
    pub qualified: bool,
    pub consideration: bool,
}

struct Candidate {
    time: Decimal,
    course: Course,
    converted: bool,
    license_level: Option<i32>,
    provenance: Provenance,
}

/// Evaluates a swimmer's performances against one standard set. Pure over
/// already-loaded data; safe to run concurrently per set or per swimmer.
pub struct EligibilityCheck<'a> {
    swimmer: &'a Swimmer,
    performances: &'a [Performance],
    set: &'a StandardSet,
    rules: Option<&'a ConversionRule>,
    age_date: NaiveDate,
}

impl<'a> EligibilityCheck<'a> {
    /// `rules` defaults to the set's own conversion rule; `date_override`
    /// replaces the set's age-reference rule when given. `today` anchors the
    /// calendar-year fallback so the evaluation stays a pure function.
    pub fn new(
        swimmer: &'a Swimmer,
        performances: &'a [Performance],
        set: &'a StandardSet,
        rules: Option<&'a ConversionRule>,
        date_override: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let age_date = date_override.unwrap_or_else(|| set.age_reference_date(today));
        Self {
            swimmer,
            performances,
            set,
            rules: rules.or(set.rule.as_ref()),
            age_date,
        }
    }

    /// Check one event. `None` means no applicable standard or no eligible
    /// performance; both are expected outcomes, not failures.
    pub fn check(&self, stroke: Stroke, distance_m: u32) -> Option<EligibilityResult> {
        let age = self.swimmer.age_on(self.age_date);

        let row_q = standard_lookup::find(
            &self.set.standards,
            stroke,
            distance_m,
            self.swimmer.gender,
            StandardType::Qualify,
            age,
        );
        let row_c = standard_lookup::find(
            &self.set.standards,
            stroke,
            distance_m,
            self.swimmer.gender,
            StandardType::Consider,
            age,
        );

        if row_q.is_none() && row_c.is_none() {
            return None;
        }

        let best = self
            .eligible_performances(stroke, distance_m)
            .filter_map(|p| self.candidate_from_performance(p, stroke, distance_m))
            .min_by_key(|c| c.time)?;

        let required = row_q.map(|r| r.time_seconds);
        let consider = row_c.map(|r| r.time_seconds);
        let delta = required.map(|r| round2(best.time - r));
        let qualified = required.is_some_and(|r| best.time <= r);
        let consideration = !qualified && consider.is_some_and(|c| best.time <= c);

        Some(EligibilityResult {
            best_time: best.time,
            best_course: best.course,
            conversion_used: best.converted,
            license_level: best.license_level,
            provenance: best.provenance,
            required,
            consider,
            delta_to_qualify: delta,
            qualified,
            consideration,
        })
    }

    fn eligible_performances(
        &self,
        stroke: Stroke,
        distance_m: u32,
    ) -> impl Iterator<Item = &'a Performance> {
        let set = self.set;
        let min_license = self.rules.and_then(|r| r.min_license_level);
        self.performances.iter().filter(move |p| {
            p.stroke == stroke
                && p.distance_m == distance_m
                && set.in_window(p.date)
                && min_license.is_none_or(|min| p.license_level.is_some_and(|l| l >= min))
        })
    }

    /// Express a performance in the pool the set requires, or discard it when
    /// the needed conversion is disallowed by the meet's rules.
    fn candidate_from_performance(
        &self,
        performance: &Performance,
        stroke: Stroke,
        distance_m: u32,
    ) -> Option<Candidate> {
        let (time, course, converted) = match self.set.pool_required {
            Some(target) if performance.course == target => {
                (performance.time_seconds, target, false)
            }
            Some(target) => {
                if !self.conversion_allowed(performance.course, target) {
                    return None;
                }
                let time = equivalent_time::convert(
                    stroke,
                    distance_m,
                    performance.course,
                    target,
                    performance.time_seconds,
                );
                (time, target, true)
            }
            None => (performance.time_seconds, performance.course, false),
        };

        Some(Candidate {
            time,
            course,
            converted,
            license_level: performance.license_level,
            provenance: Provenance {
                meet_name: performance.meet_name.clone(),
                date: performance.date,
                source_url: performance.source_url.clone(),
                original_course: performance.course,
                original_time: performance.time_seconds,
            },
        })
    }

    fn conversion_allowed(&self, from: Course, to: Course) -> bool {
        if from == to {
            return true;
        }
        self.rules
            .is_some_and(|rules| rules.conversion_allowed(from, to))
    }
}
