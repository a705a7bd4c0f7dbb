//! Sizing request payload: the boundary between untrusted input files and
//! the validated domain types the engine consumes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::domain::assumptions::Assumptions;
use crate::domain::load::{Appliance, LoadError, LoadProfile};
use crate::domain::types::Power;

/// One appliance entry as written in a request file
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplianceSpec {
    #[validate(length(min = 1, message = "appliance name must not be empty"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "wattage must be greater than 0"))]
    pub wattage_w: f64,
    #[validate(range(min = 0.0, message = "hours per day must be 0 or more"))]
    pub hours_per_day: f64,
    #[validate(range(min = 1))]
    pub quantity: Option<u32>,
    #[validate(range(min = 0.0))]
    pub night_hours: Option<f64>,
    #[serde(default)]
    pub use_at_night: bool,
    #[serde(default)]
    pub high_surge: bool,
}

impl From<ApplianceSpec> for Appliance {
    fn from(spec: ApplianceSpec) -> Self {
        Appliance {
            name: spec.name,
            power: Power::watts(spec.wattage_w),
            hours_per_day: spec.hours_per_day,
            quantity: spec.quantity.unwrap_or(1),
            night_hours: spec.night_hours,
            use_at_night: spec.use_at_night,
            high_surge: spec.high_surge,
        }
    }
}

/// A full sizing request: appliances plus optional assumption overrides
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SizingRequest {
    #[validate(length(min = 1, message = "at least one appliance is required"), nested)]
    #[serde(rename = "appliance")]
    pub appliances: Vec<ApplianceSpec>,
    pub assumptions: Option<Assumptions>,
}

impl SizingRequest {
    /// Parse and validate a request from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?;
        let request: SizingRequest = toml::from_str(&raw)
            .with_context(|| format!("parsing request file {}", path.display()))?;
        request
            .validate()
            .with_context(|| format!("validating request file {}", path.display()))?;
        Ok(request)
    }

    /// Convert the appliance entries into a validated load profile
    pub fn into_profile(self) -> Result<LoadProfile, LoadError> {
        LoadProfile::from_appliances(self.appliances.into_iter().map(Appliance::from).collect())
    }
}
