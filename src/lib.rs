pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvFileSource, InMemorySource};
pub use config::{CliConfig, SearchConfig};
pub use core::pipeline::SearchPipeline;
pub use domain::model::Detachment;
pub use domain::ports::{ConfigProvider, DetachmentSource};
pub use utils::error::{Result, SearchError};
