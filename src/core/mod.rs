pub mod aggregate;
pub mod engine;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{ActivitySeries, Period, Station, StationTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
