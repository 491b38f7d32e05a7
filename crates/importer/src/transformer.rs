use tracing::{info, warn};
use uuid::Uuid;

use standards::services::time_parser;
use standards::{NewPerformance, Performance, StandardsError};

use crate::error::Result;
use crate::models::RawPerformance;

/// Normalize one scraped record into a performance: enum parsing, time-text
/// parsing through the codec (with the distance hint so malformed OCR times
/// get corrected), then construction, which derives the LC/SC dual times.
pub fn normalize(swimmer_id: Uuid, raw: RawPerformance) -> Result<Performance> {
    let stroke = raw.stroke.parse()?;
    let course = raw.course_type.parse()?;

    let time_seconds = time_parser::parse(&raw.time_str, Some(raw.distance_m))?.ok_or_else(
        || StandardsError::InvalidTime(format!("empty time for {} {}m", raw.stroke, raw.distance_m)),
    )?;

    let performance = Performance::create(NewPerformance {
        swimmer_id,
        stroke,
        distance_m: raw.distance_m,
        course,
        time_seconds,
        date: raw.date,
        meet_name: raw.meet_name,
        license_level: raw.license_level,
        source_url: raw.source_url,
        original_time_str: Some(raw.time_str),
    })?;

    Ok(performance)
}

/// Summary of one import batch.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub performances: Vec<Performance>,
    pub imported: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Normalize a batch, skipping records already present (same event, course,
/// date and time) and tolerating individually malformed records.
pub fn import_batch(
    swimmer_id: Uuid,
    raws: Vec<RawPerformance>,
    existing: &[Performance],
) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for raw in raws {
        match normalize(swimmer_id, raw) {
            Ok(performance) => {
                if is_duplicate(existing, &performance)
                    || is_duplicate(&outcome.performances, &performance)
                {
                    outcome.skipped += 1;
                } else {
                    outcome.imported += 1;
                    outcome.performances.push(performance);
                }
            }
            Err(err) => {
                outcome.errors += 1;
                warn!(error = %err, "failed to normalize scraped performance");
            }
        }
    }

    info!(
        %swimmer_id,
        imported = outcome.imported,
        skipped = outcome.skipped,
        errors = outcome.errors,
        "import complete"
    );

    outcome
}

fn is_duplicate(existing: &[Performance], p: &Performance) -> bool {
    existing.iter().any(|e| {
        e.stroke == p.stroke
            && e.distance_m == p.distance_m
            && e.course == p.course
            && e.date == p.date
            && e.time_seconds == p.time_seconds
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use standards::{Course, Stroke};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn raw(stroke: &str, distance_m: u32, course: &str, time: &str) -> RawPerformance {
        RawPerformance {
            stroke: stroke.to_string(),
            distance_m,
            course_type: course.to_string(),
            time_str: time.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            meet_name: "Spring Open".to_string(),
            license_level: Some(2),
            source_url: Some("https://results.example/1".to_string()),
        }
    }

    #[test]
    fn test_normalize() {
        let p = normalize(Uuid::new_v4(), raw("FREE", 100, "LC", "1:00.00")).unwrap();
        assert_eq!(p.stroke, Stroke::Free);
        assert_eq!(p.course, Course::Lc);
        assert_eq!(p.time_seconds, d("60.00"));
        assert_eq!(p.sc_time_seconds, d("59.10"));
        assert_eq!(p.original_time_str.as_deref(), Some("1:00.00"));
    }

    #[test]
    fn test_normalize_corrects_malformed_sprint_time() {
        let p = normalize(Uuid::new_v4(), raw("FREE", 50, "SC", "6:39.73")).unwrap();
        assert_eq!(p.time_seconds, d("39.73"));
        // Provenance keeps the uncorrected text.
        assert_eq!(p.original_time_str.as_deref(), Some("6:39.73"));
    }

    #[test]
    fn test_normalize_rejects_unknown_stroke() {
        assert!(normalize(Uuid::new_v4(), raw("SIDESTROKE", 100, "LC", "60.0")).is_err());
    }

    #[test]
    fn test_import_batch_skips_duplicates_and_counts_errors() {
        let swimmer_id = Uuid::new_v4();
        let existing = vec![normalize(swimmer_id, raw("FREE", 100, "LC", "60.00")).unwrap()];

        let outcome = import_batch(
            swimmer_id,
            vec![
                raw("FREE", 100, "LC", "1:00.00"),  // duplicate of existing
                raw("BACK", 200, "SC", "2:10.00"),  // new
                raw("BACK", 200, "SC", "2:10.00"),  // duplicate within batch
                raw("FLY", 100, "LC", "not a time"), // malformed
            ],
            &existing,
        );

        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.performances.len(), 1);
        assert_eq!(outcome.performances[0].stroke, Stroke::Back);
    }
}
