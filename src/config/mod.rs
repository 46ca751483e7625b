use std::path::PathBuf;

use clap::Parser;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_latitude, validate_longitude, validate_positive_number, Validate,
};

/// Reference point: Jacksonville, Florida.
pub const JACKSONVILLE_LAT: f64 = 30.3322;
pub const JACKSONVILLE_LON: f64 = -81.6557;
pub const RADIUS_MILES: f64 = 100.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "detachment-search")]
#[command(about = "Find Marine Corps League detachments near Jacksonville, Florida")]
pub struct CliConfig {
    /// Path to the detachment roster CSV (header row required)
    #[arg(default_value = "detachments.csv")]
    pub input: PathBuf,
}

/// Search parameters. Fixed configuration constants, not runtime state.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub radius_miles: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            origin_lat: JACKSONVILLE_LAT,
            origin_lon: JACKSONVILLE_LON,
            radius_miles: RADIUS_MILES,
        }
    }
}

impl ConfigProvider for SearchConfig {
    fn origin_latitude(&self) -> f64 {
        self.origin_lat
    }

    fn origin_longitude(&self) -> f64 {
        self.origin_lon
    }

    fn radius_miles(&self) -> f64 {
        self.radius_miles
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validate_latitude(self.origin_lat)?;
        validate_longitude(self.origin_lon)?;
        validate_positive_number("radius_miles", self.radius_miles)?;
        Ok(())
    }
}
