use crate::domain::model::{ActivitySeries, StationTable};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn archive_url(&self) -> &str;
    fn scratch_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn frame_interval_ms(&self) -> u32;
    fn keep_scratch(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch and unpack the archive, then parse the station sheet.
    async fn extract(&self) -> Result<StationTable>;
    /// Derive the data period and the per-year aggregates.
    async fn transform(&self, table: StationTable) -> Result<ActivitySeries>;
    /// Render the time-lapse and clean up, returning the artifact path.
    async fn load(&self, series: ActivitySeries) -> Result<String>;
}
