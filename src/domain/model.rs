use serde::{Deserialize, Serialize};

/// A local chapter record. Immutable after construction; no identity beyond
/// its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detachment {
    pub number: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Detachment {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            latitude,
            longitude,
        }
    }
}
