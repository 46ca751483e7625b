pub mod geo;
pub mod natural;
pub mod pipeline;
pub mod report;
pub mod search;

pub use crate::domain::model::Detachment;
pub use crate::domain::ports::{ConfigProvider, DetachmentSource};
pub use crate::utils::error::Result;
