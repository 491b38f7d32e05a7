pub mod error;
pub mod models;
pub mod traits;
pub mod transformer;

pub use error::{ImporterError, Result};
pub use models::RawPerformance;
pub use traits::PerformanceSource;
pub use transformer::{ImportOutcome, import_batch, normalize};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    struct FixtureSource;

    #[async_trait::async_trait]
    impl PerformanceSource for FixtureSource {
        async fn fetch_personal_bests(&self, _membership_id: &str) -> Result<Vec<RawPerformance>> {
            let raw: Vec<RawPerformance> = serde_json::from_str(
                r#"[{
                    "stroke": "FREE",
                    "distance_m": 100,
                    "course_type": "SC",
                    "time_str": "58.00",
                    "date": "2025-03-01",
                    "meet_name": "Spring Open",
                    "license_level": 2,
                    "source_url": "https://results.example/1"
                }]"#,
            )
            .map_err(|e| ImporterError::SourceError(e.to_string()))?;
            Ok(raw)
        }

        async fn fetch_historic_times(&self, _membership_id: &str) -> Result<Vec<RawPerformance>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_source_records_flow_through_import() {
        let source = FixtureSource;
        let raws = source.fetch_personal_bests("123456").await.unwrap();
        assert_eq!(raws[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        let outcome = import_batch(Uuid::new_v4(), raws, &[]);
        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.performances[0].course, standards::Course::Sc);
    }
}
