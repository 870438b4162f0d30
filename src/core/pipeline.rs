use crate::core::{aggregate, parse};
use crate::domain::model::{ActivitySeries, StationTable};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::render::animation::TimeLapse;
use crate::utils::error::Result;
use reqwest::Client;
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

pub struct GrdcPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GrdcPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for GrdcPipeline<C> {
    async fn extract(&self) -> Result<StationTable> {
        tracing::info!("Fetching and unzipping archive...");
        tracing::debug!("GET {}", self.config.archive_url());

        let response = self
            .client
            .get(self.config.archive_url())
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes", bytes.len());

        let scratch = Path::new(self.config.scratch_dir());
        std::fs::create_dir_all(scratch)?;

        let mut archive = ZipArchive::new(Cursor::new(bytes.as_ref()))?;
        archive.extract(scratch)?;
        tracing::debug!(
            "Extracted {} archive entries to {}",
            archive.len(),
            scratch.display()
        );

        tracing::info!("Parsing station catalogue...");
        let station_file = parse::find_station_file(scratch)?;
        tracing::debug!("Station sheet: {}", station_file.display());

        parse::parse_station_file(&station_file)
    }

    async fn transform(&self, table: StationTable) -> Result<ActivitySeries> {
        tracing::info!("Establishing data period...");
        let series = aggregate::aggregate(&table)?;
        tracing::info!(
            "Data period {}..{}, peak of {} active stations",
            series.period.start,
            series.period.end,
            series.counts.iter().copied().max().unwrap_or(0)
        );

        Ok(series)
    }

    async fn load(&self, series: ActivitySeries) -> Result<String> {
        tracing::info!("Rendering time-lapse ({} frames)...", series.period.len());
        let output = self.config.output_path().to_string();
        let timelapse = TimeLapse::new(series, self.config.frame_interval_ms());
        timelapse.render(Path::new(&output))?;

        // Cleanup is reached only after a successful render.
        if self.config.keep_scratch() {
            tracing::debug!("Keeping scratch directory {}", self.config.scratch_dir());
        } else {
            tracing::debug!("Removing scratch directory {}", self.config.scratch_dir());
            std::fs::remove_dir_all(self.config.scratch_dir())?;
        }

        Ok(output)
    }
}
