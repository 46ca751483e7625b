use crate::domain::model::Detachment;
use crate::utils::error::Result;

/// Loader capability. Two concrete sources exist: a CSV file on disk and an
/// embedded literal roster.
pub trait DetachmentSource {
    fn load(&self) -> Result<Vec<Detachment>>;
}

pub trait ConfigProvider {
    fn origin_latitude(&self) -> f64;
    fn origin_longitude(&self) -> f64;
    fn radius_miles(&self) -> f64;
}
