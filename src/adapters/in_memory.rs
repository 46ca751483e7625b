use crate::domain::model::Detachment;
use crate::domain::ports::DetachmentSource;
use crate::utils::error::Result;

/// Literal-list roster source: values arrive already typed, so there is no
/// parsing or validation step.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    detachments: Vec<Detachment>,
}

impl InMemorySource {
    pub fn new(detachments: Vec<Detachment>) -> Self {
        Self { detachments }
    }

    /// The ten-entry sample roster mirrored by the checked-in
    /// `detachments.csv`. Eight entries sit within 100 miles of
    /// Jacksonville; Orlando and Tallahassee do not.
    pub fn sample_roster() -> Self {
        Self::new(vec![
            Detachment::new("101", "Gator", "Gainesville", "FL", 29.6516, -82.3248),
            Detachment::new("12A", "Ancient City", "St. Augustine", "FL", 29.9012, -81.3124),
            Detachment::new("9", "First Coast", "Jacksonville", "FL", 30.3322, -81.6557),
            Detachment::new("310", "Capital City", "Tallahassee", "FL", 30.4383, -84.2807),
            Detachment::new("56", "Amelia Island", "Fernandina Beach", "FL", 30.6697, -81.4626),
            Detachment::new("77", "Central Florida", "Orlando", "FL", 28.5383, -81.3792),
            Detachment::new("12", "St. Johns River", "Orange Park", "FL", 30.1660, -81.7065),
            Detachment::new("874", "Suwannee", "Lake City", "FL", 30.1897, -82.6393),
            Detachment::new("200B", "Halifax", "Daytona Beach", "FL", 29.2108, -81.0228),
            Detachment::new("144", "Golden Isles", "Brunswick", "GA", 31.1499, -81.4915),
        ])
    }
}

impl DetachmentSource for InMemorySource {
    fn load(&self) -> Result<Vec<Detachment>> {
        Ok(self.detachments.clone())
    }
}
