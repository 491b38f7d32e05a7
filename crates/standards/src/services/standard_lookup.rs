use tracing::warn;

use crate::models::{Gender, StandardRow, StandardType, Stroke};

/// Find the standard row applying to one event/age/gender combination.
///
/// Well-formed data has at most one age band matching a given age; if bands
/// overlap this flags the inconsistency and returns the first match in
/// storage order.
pub fn find(
    rows: &[StandardRow],
    stroke: Stroke,
    distance_m: u32,
    gender: Gender,
    standard_type: StandardType,
    age: i32,
) -> Option<&StandardRow> {
    let mut matches = rows.iter().filter(|row| {
        row.stroke == stroke
            && row.distance_m == distance_m
            && row.gender == gender
            && row.standard_type == standard_type
            && row.applies_to_age(age)
    });

    let first = matches.next()?;
    if matches.next().is_some() {
        warn!(
            stroke = %stroke,
            distance_m,
            gender = %gender,
            age,
            "overlapping age bands in standards data, taking first match"
        );
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn row(
        stroke: Stroke,
        distance_m: u32,
        gender: Gender,
        standard_type: StandardType,
        age_min: Option<i32>,
        age_max: Option<i32>,
        time: &str,
    ) -> StandardRow {
        StandardRow {
            row_id: Uuid::new_v4(),
            stroke,
            distance_m,
            gender,
            standard_type,
            pool_of_standard: Course::Lc,
            time_seconds: time.parse::<Decimal>().unwrap(),
            age_min,
            age_max,
        }
    }

    #[test]
    fn test_find_matches_event_and_age_band() {
        let rows = vec![
            row(Stroke::Free, 100, Gender::F, StandardType::Qualify, Some(13), Some(14), "62.00"),
            row(Stroke::Free, 100, Gender::F, StandardType::Qualify, Some(15), Some(16), "59.00"),
            row(Stroke::Free, 100, Gender::M, StandardType::Qualify, Some(15), Some(16), "55.00"),
        ];
        let found = find(&rows, Stroke::Free, 100, Gender::F, StandardType::Qualify, 15).unwrap();
        assert_eq!(found.time_seconds, "59.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_find_respects_standard_type() {
        let rows = vec![
            row(Stroke::Back, 200, Gender::M, StandardType::Qualify, None, None, "130.00"),
            row(Stroke::Back, 200, Gender::M, StandardType::Consider, None, None, "133.00"),
        ];
        let found = find(&rows, Stroke::Back, 200, Gender::M, StandardType::Consider, 20).unwrap();
        assert_eq!(found.standard_type, StandardType::Consider);
    }

    #[test]
    fn test_find_none_when_no_band_applies() {
        let rows = vec![row(
            Stroke::Free, 100, Gender::F, StandardType::Qualify, Some(13), Some(14), "62.00",
        )];
        assert!(find(&rows, Stroke::Free, 100, Gender::F, StandardType::Qualify, 15).is_none());
        assert!(find(&rows, Stroke::Fly, 100, Gender::F, StandardType::Qualify, 13).is_none());
    }

    #[test]
    fn test_overlapping_bands_take_first() {
        let rows = vec![
            row(Stroke::Free, 50, Gender::M, StandardType::Qualify, Some(10), Some(14), "32.00"),
            row(Stroke::Free, 50, Gender::M, StandardType::Qualify, Some(14), Some(16), "29.00"),
        ];
        let found = find(&rows, Stroke::Free, 50, Gender::M, StandardType::Qualify, 14).unwrap();
        assert_eq!(found.time_seconds, "32.00".parse::<Decimal>().unwrap());
    }
}
