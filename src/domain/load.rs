use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Power;

/// Load record errors, rejected at the boundary before sizing runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("appliance name must not be empty")]
    EmptyName,
    #[error("appliance '{name}' has non-positive wattage: {watts} W")]
    NonPositiveWattage { name: String, watts: f64 },
    #[error("appliance '{name}' has negative daily hours: {hours}")]
    NegativeHours { name: String, hours: f64 },
    #[error("appliance '{name}' has negative night hours: {hours}")]
    NegativeNightHours { name: String, hours: f64 },
    #[error("appliance '{name}' has zero quantity")]
    ZeroQuantity { name: String },
    #[error("appliance '{name}' has a non-finite {field}")]
    NonFinite { name: String, field: &'static str },
}

/// Nighttime-usage accounting policy.
///
/// Controls which appliances the battery bank is assumed to carry
/// overnight; the choice is an explicit configuration knob.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NightUsagePolicy {
    /// Every appliance is assumed to run for the global night-hours value
    #[default]
    UniformHours,
    /// Only appliances flagged `use_at_night` count; each uses its own
    /// night-hours override when set, the global value otherwise
    PerApplianceOptIn,
}

impl std::fmt::Display for NightUsagePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NightUsagePolicy::UniformHours => write!(f, "uniform_hours"),
            NightUsagePolicy::PerApplianceOptIn => write!(f, "per_appliance_opt_in"),
        }
    }
}

impl std::str::FromStr for NightUsagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform_hours" | "uniform" => Ok(NightUsagePolicy::UniformHours),
            "per_appliance_opt_in" | "opt_in" => Ok(NightUsagePolicy::PerApplianceOptIn),
            _ => Err(format!("Unknown night usage policy: {}", s)),
        }
    }
}

/// A single appliance load. Immutable once recorded in a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appliance {
    pub name: String,
    pub power: Power,
    pub hours_per_day: f64,
    /// How many identical units of this appliance are installed
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Per-appliance night-hours override (only meaningful under opt-in policy)
    #[serde(default)]
    pub night_hours: Option<f64>,
    #[serde(default)]
    pub use_at_night: bool,
    /// Motors, compressors and similar inrush-heavy loads
    #[serde(default)]
    pub high_surge: bool,
}

fn default_quantity() -> u32 {
    1
}

impl Appliance {
    pub fn new(name: impl Into<String>, power: Power, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            power,
            hours_per_day,
            quantity: 1,
            night_hours: None,
            use_at_night: false,
            high_surge: false,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_night_hours(mut self, night_hours: f64) -> Self {
        self.night_hours = Some(night_hours);
        self.use_at_night = true;
        self
    }

    pub fn used_at_night(mut self) -> Self {
        self.use_at_night = true;
        self
    }

    pub fn with_high_surge(mut self) -> Self {
        self.high_surge = true;
        self
    }

    /// Validate this record for sanity
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.name.trim().is_empty() {
            return Err(LoadError::EmptyName);
        }

        let watts = self.power.as_watts();
        if !watts.is_finite() {
            return Err(LoadError::NonFinite {
                name: self.name.clone(),
                field: "wattage",
            });
        }
        if watts <= 0.0 {
            return Err(LoadError::NonPositiveWattage {
                name: self.name.clone(),
                watts,
            });
        }

        if !self.hours_per_day.is_finite() {
            return Err(LoadError::NonFinite {
                name: self.name.clone(),
                field: "hours_per_day",
            });
        }
        if self.hours_per_day < 0.0 {
            return Err(LoadError::NegativeHours {
                name: self.name.clone(),
                hours: self.hours_per_day,
            });
        }

        if let Some(night) = self.night_hours {
            if !night.is_finite() {
                return Err(LoadError::NonFinite {
                    name: self.name.clone(),
                    field: "night_hours",
                });
            }
            if night < 0.0 {
                return Err(LoadError::NegativeNightHours {
                    name: self.name.clone(),
                    hours: night,
                });
            }
        }

        if self.quantity == 0 {
            return Err(LoadError::ZeroQuantity {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}

/// Order-preserving collection of appliance loads.
///
/// Duplicate names are allowed. Records are validated on insertion, so the
/// sizing stages can assume well-formed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoadProfile {
    appliances: Vec<Appliance>,
}

impl LoadProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appliances(appliances: Vec<Appliance>) -> Result<Self, LoadError> {
        for appliance in &appliances {
            appliance.validate()?;
        }
        Ok(Self { appliances })
    }

    pub fn push(&mut self, appliance: Appliance) -> Result<(), LoadError> {
        appliance.validate()?;
        self.appliances.push(appliance);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.appliances.iter()
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}
