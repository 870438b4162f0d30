pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::EtlEngine, pipeline::GrdcPipeline};
pub use crate::utils::error::{EtlError, Result};
