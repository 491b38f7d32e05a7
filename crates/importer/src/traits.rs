use crate::Result;
use crate::models::RawPerformance;

/// A results provider for one swimmer's race history. Implementations own
/// the network side (scraping, pagination, retries); the transformer only
/// sees the raw records they return.
#[async_trait::async_trait]
pub trait PerformanceSource: Send + Sync {
    /// Fetch the swimmer's personal bests.
    async fn fetch_personal_bests(&self, membership_id: &str) -> Result<Vec<RawPerformance>>;

    /// Fetch the swimmer's full race history.
    async fn fetch_historic_times(&self, membership_id: &str) -> Result<Vec<RawPerformance>>;
}
