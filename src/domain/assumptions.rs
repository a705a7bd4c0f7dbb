use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::load::NightUsagePolicy;
use super::types::{Capacity, Power, Ratio, Voltage};

/// Assumption errors, rejected before sizing runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssumptionsError {
    #[error("panel wattage must be finite and non-negative, got {0} W")]
    InvalidPanelPower(f64),
    #[error("peak sun hours must be finite and non-negative, got {0}")]
    InvalidPeakSunHours(f64),
    #[error("system efficiency must be within (0, 1], got {0}")]
    InvalidSystemEfficiency(f64),
    #[error("battery voltage must be finite and non-negative, got {0} V")]
    InvalidBatteryVoltage(f64),
    #[error("depth of discharge must be within (0, 1], got {0}")]
    InvalidDepthOfDischarge(f64),
    #[error("single battery capacity must be finite and non-negative, got {0} Ah")]
    InvalidBatteryCapacity(f64),
    #[error("round-trip efficiency must be within (0, 1], got {0}")]
    InvalidRoundTripEfficiency(f64),
    #[error("night hours must be finite and non-negative, got {0}")]
    InvalidNightHours(f64),
    #[error("inverter margin must be a finite factor of at least 1.0, got {0}")]
    InvalidInverterMargin(f64),
    #[error("surge factor must be a finite factor of at least 1.0, got {0}")]
    InvalidSurgeFactor(f64),
    #[error("reserve margin factor must be a finite factor of at least 1.0, got {0}")]
    InvalidReserveFactor(f64),
}

/// Battery chemistry, used to seed a sensible depth-of-discharge default.
/// An explicitly configured DoD always wins.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatteryChemistry {
    #[default]
    Lithium,
    Gel,
}

impl BatteryChemistry {
    /// Conservative usable fraction for the chemistry
    pub fn typical_depth_of_discharge(&self) -> Ratio {
        match self {
            BatteryChemistry::Lithium => Ratio::from_fraction(0.8),
            BatteryChemistry::Gel => Ratio::from_fraction(0.5),
        }
    }
}

impl std::fmt::Display for BatteryChemistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryChemistry::Lithium => write!(f, "lithium"),
            BatteryChemistry::Gel => write!(f, "gel"),
        }
    }
}

impl std::str::FromStr for BatteryChemistry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lithium" => Ok(BatteryChemistry::Lithium),
            "gel" => Ok(BatteryChemistry::Gel),
            _ => Err(format!("Unknown battery chemistry: {}", s)),
        }
    }
}

/// How the battery bank's energy reserve margin is computed.
///
/// Both modes express "store more than is consumed", either as a flat
/// multiplier or as a division by round-trip efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReserveMargin {
    /// Multiply nighttime demand by a flat factor
    FixedFactor { factor: f64 },
    /// Divide nighttime demand by the round-trip efficiency
    RoundTripLosses,
}

impl Default for ReserveMargin {
    fn default() -> Self {
        ReserveMargin::FixedFactor { factor: 1.1 }
    }
}

/// System assumptions supplied per calculation. No persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Assumptions {
    pub panel_power: Power,
    pub peak_sun_hours: f64,
    pub system_efficiency: Ratio,
    pub battery_voltage: Voltage,
    pub depth_of_discharge: Ratio,
    pub single_battery: Capacity,
    pub round_trip_efficiency: Ratio,
    pub night_hours: f64,
    pub inverter_margin: f64,
    pub surge_factor: f64,
    pub night_policy: NightUsagePolicy,
    pub reserve_margin: ReserveMargin,
    pub chemistry: BatteryChemistry,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            panel_power: Power::watts(300.0),
            peak_sun_hours: 5.0,
            system_efficiency: Ratio::from_fraction(0.8),
            battery_voltage: Voltage::volts(12.0),
            depth_of_discharge: Ratio::from_fraction(0.5),
            single_battery: Capacity::amp_hours(100.0),
            round_trip_efficiency: Ratio::from_fraction(0.9),
            night_hours: 6.0,
            inverter_margin: 1.2,
            surge_factor: 3.0,
            night_policy: NightUsagePolicy::default(),
            reserve_margin: ReserveMargin::default(),
            chemistry: BatteryChemistry::default(),
        }
    }
}

impl Assumptions {
    /// Defaults with the depth of discharge seeded from a chemistry
    pub fn for_chemistry(chemistry: BatteryChemistry) -> Self {
        Self {
            chemistry,
            depth_of_discharge: chemistry.typical_depth_of_discharge(),
            ..Self::default()
        }
    }

    /// Validate assumptions for sanity.
    ///
    /// Zero panel power, battery voltage or single-battery capacity pass:
    /// those are degenerate-but-valid configurations the sizing stages answer
    /// with zero counts rather than an error.
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        let panel_w = self.panel_power.as_watts();
        if !panel_w.is_finite() || panel_w < 0.0 {
            return Err(AssumptionsError::InvalidPanelPower(panel_w));
        }

        if !self.peak_sun_hours.is_finite() || self.peak_sun_hours < 0.0 {
            return Err(AssumptionsError::InvalidPeakSunHours(self.peak_sun_hours));
        }

        let efficiency = self.system_efficiency.as_fraction();
        if !efficiency.is_finite() || efficiency <= 0.0 || efficiency > 1.0 {
            return Err(AssumptionsError::InvalidSystemEfficiency(efficiency));
        }

        let voltage = self.battery_voltage.as_volts();
        if !voltage.is_finite() || voltage < 0.0 {
            return Err(AssumptionsError::InvalidBatteryVoltage(voltage));
        }

        let dod = self.depth_of_discharge.as_fraction();
        if !dod.is_finite() || dod <= 0.0 || dod > 1.0 {
            return Err(AssumptionsError::InvalidDepthOfDischarge(dod));
        }

        let single_ah = self.single_battery.as_amp_hours();
        if !single_ah.is_finite() || single_ah < 0.0 {
            return Err(AssumptionsError::InvalidBatteryCapacity(single_ah));
        }

        let round_trip = self.round_trip_efficiency.as_fraction();
        if !round_trip.is_finite() || round_trip <= 0.0 || round_trip > 1.0 {
            return Err(AssumptionsError::InvalidRoundTripEfficiency(round_trip));
        }

        if !self.night_hours.is_finite() || self.night_hours < 0.0 {
            return Err(AssumptionsError::InvalidNightHours(self.night_hours));
        }

        if !self.inverter_margin.is_finite() || self.inverter_margin < 1.0 {
            return Err(AssumptionsError::InvalidInverterMargin(self.inverter_margin));
        }

        if !self.surge_factor.is_finite() || self.surge_factor < 1.0 {
            return Err(AssumptionsError::InvalidSurgeFactor(self.surge_factor));
        }

        if let ReserveMargin::FixedFactor { factor } = self.reserve_margin {
            if !factor.is_finite() || factor < 1.0 {
                return Err(AssumptionsError::InvalidReserveFactor(factor));
            }
        }

        Ok(())
    }
}
