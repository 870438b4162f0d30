use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting GRDC time-lapse pipeline");

        let table = self.pipeline.extract().await?;
        tracing::info!("Extracted {} station records", table.len());

        let series = self.pipeline.transform(table).await?;
        tracing::info!("Aggregated {} years of station activity", series.period.len());

        let output_path = self.pipeline.load(series).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
