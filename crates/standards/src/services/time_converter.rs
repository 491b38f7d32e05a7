use std::collections::HashMap;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Course, Stroke};

use super::round2;

lazy_static! {
    /// Fractional LC↔SC deltas keyed by (distance, stroke), used when a
    /// performance is imported to derive its estimated time in the other
    /// course. Negative means SC is faster. 50m events carry no delta (a
    /// single length gains nothing from extra turns); the magnitude grows
    /// with distance and is largest for breaststroke, which turns slowest.
    ///
    /// Independent of the equivalent-time factor table: the two are
    /// calibrated separately and produce different numbers on purpose.
    static ref CONVERSION_DELTAS: HashMap<(u32, Stroke), Decimal> = {
        use Stroke::{Back, Breast, Fly, Free, Im};

        // (distance, stroke, delta in thousandths)
        let entries: [(u32, Stroke, i64); 30] = [
            (50, Free, 0),
            (50, Back, 0),
            (50, Breast, 0),
            (50, Fly, 0),
            (50, Im, 0),
            (100, Free, -15),
            (100, Back, -20),
            (100, Breast, -25),
            (100, Fly, -20),
            (100, Im, -20),
            (200, Free, -25),
            (200, Back, -30),
            (200, Breast, -35),
            (200, Fly, -30),
            (200, Im, -30),
            (400, Free, -30),
            (400, Back, -35),
            (400, Breast, -40),
            (400, Fly, -35),
            (400, Im, -35),
            (800, Free, -35),
            (800, Back, -40),
            (800, Breast, -45),
            (800, Fly, -40),
            (800, Im, -40),
            (1500, Free, -40),
            (1500, Back, -45),
            (1500, Breast, -50),
            (1500, Fly, -45),
            (1500, Im, -45),
        ];

        entries
            .into_iter()
            .map(|(distance, stroke, thousandths)| {
                ((distance, stroke), Decimal::new(thousandths, 3))
            })
            .collect()
    };
}

fn conversion_delta(distance_m: u32, stroke: Stroke) -> Decimal {
    CONVERSION_DELTAS
        .get(&(distance_m, stroke))
        .copied()
        .unwrap_or(Decimal::ZERO)
}

/// Estimate a short-course time from a long-course one.
pub fn lc_to_sc(lc_time_seconds: Decimal, distance_m: u32, stroke: Stroke) -> Decimal {
    lc_time_seconds * (Decimal::ONE + conversion_delta(distance_m, stroke))
}

/// Estimate a long-course time from a short-course one. Inverse of
/// [`lc_to_sc`] for the same delta.
pub fn sc_to_lc(sc_time_seconds: Decimal, distance_m: u32, stroke: Stroke) -> Decimal {
    sc_time_seconds / (Decimal::ONE + conversion_delta(distance_m, stroke))
}

/// A time expressed in both courses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualTimes {
    pub lc: Decimal,
    pub sc: Decimal,
}

/// Derive the LC and SC representations of a recorded time, the native one
/// verbatim and the other estimated. Called once when a performance is
/// created.
pub fn derive_dual_times(
    native_seconds: Decimal,
    distance_m: u32,
    stroke: Stroke,
    native_course: Course,
) -> DualTimes {
    match native_course {
        Course::Lc => DualTimes {
            lc: native_seconds,
            sc: round2(lc_to_sc(native_seconds, distance_m, stroke)),
        },
        Course::Sc => DualTimes {
            lc: round2(sc_to_lc(native_seconds, distance_m, stroke)),
            sc: native_seconds,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_delta_for_50m() {
        for stroke in [Stroke::Free, Stroke::Back, Stroke::Breast, Stroke::Fly] {
            assert_eq!(lc_to_sc(d("30.00"), 50, stroke), d("30.00"));
            assert_eq!(sc_to_lc(d("30.00"), 50, stroke), d("30.00"));
        }
    }

    #[test]
    fn test_lc_to_sc_100_free() {
        // -1.5%: 60.00 * 0.985
        assert_eq!(lc_to_sc(d("60.00"), 100, Stroke::Free), d("59.1000"));
    }

    #[test]
    fn test_sc_to_lc_inverts_lc_to_sc() {
        let sc = lc_to_sc(d("135.50"), 200, Stroke::Breast);
        assert_eq!(round2(sc_to_lc(sc, 200, Stroke::Breast)), d("135.50"));
    }

    #[test]
    fn test_delta_grows_with_distance_and_stroke() {
        assert!(conversion_delta(1500, Stroke::Free) < conversion_delta(100, Stroke::Free));
        assert!(conversion_delta(200, Stroke::Breast) < conversion_delta(200, Stroke::Free));
    }

    #[test]
    fn test_unknown_distance_is_noop() {
        assert_eq!(lc_to_sc(d("100.00"), 75, Stroke::Free), d("100.00"));
    }

    #[test]
    fn test_derive_dual_times_from_lc() {
        let dual = derive_dual_times(d("60.00"), 100, Stroke::Free, Course::Lc);
        assert_eq!(dual.lc, d("60.00"));
        assert_eq!(dual.sc, d("59.10"));
    }

    #[test]
    fn test_derive_dual_times_from_sc() {
        let dual = derive_dual_times(d("120.00"), 200, Stroke::Back, Course::Sc);
        assert_eq!(dual.sc, d("120.00"));
        // 120.00 / 0.970 = 123.7113...
        assert_eq!(dual.lc, d("123.71"));
    }

    #[test]
    fn test_differs_from_equivalent_time_table() {
        // The import-path estimate and the meet-qualification conversion are
        // separate calibrations; 100 FREE SC→LC: 1/0.985 vs 1.010.
        let via_delta = round2(sc_to_lc(d("60.00"), 100, Stroke::Free));
        let via_factor = super::super::equivalent_time::convert(
            Stroke::Free,
            100,
            Course::Sc,
            Course::Lc,
            d("60.00"),
        );
        assert_ne!(via_delta, via_factor);
    }
}
