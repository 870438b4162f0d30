use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARCHIVE_URL: &str =
    "http://www.bafg.de/GRDC/EN/02_srvcs/21_tmsrs/211_ctlgs/GRDC_Stations.zip?__blob=publicationFile";

/// Running with no arguments reproduces the original one-shot batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "grdc-timelapse")]
#[command(about = "Render a time-lapse of active GRDC river monitoring stations")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ARCHIVE_URL)]
    pub url: String,

    #[arg(long, default_value = "./tmp")]
    pub scratch_dir: String,

    #[arg(long, default_value = "./GRDC_time_lapse.gif")]
    pub output: String,

    #[arg(long, default_value = "100")]
    pub frame_interval_ms: u32,

    #[arg(long, help = "Leave the scratch directory in place after rendering")]
    pub keep_scratch: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn archive_url(&self) -> &str {
        &self.url
    }

    fn scratch_dir(&self) -> &str {
        &self.scratch_dir
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms
    }

    fn keep_scratch(&self) -> bool {
        self.keep_scratch
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_path("scratch_dir", &self.scratch_dir)?;
        validate_path("output", &self.output)?;
        validate_range("frame_interval_ms", self.frame_interval_ms, 10, 10_000)?;
        Ok(())
    }
}
