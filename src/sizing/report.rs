use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::types::{Capacity, Energy, Power};

use super::bank_voltage::BankVoltage;

/// Complete sizing result, fully recomputed on every invocation.
///
/// A pure function of the load profile and assumptions; never mutated
/// after computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizingReport {
    #[serde(rename = "daily_energy_wh")]
    pub daily_energy: Energy,
    #[serde(rename = "nighttime_energy_wh")]
    pub nighttime_energy: Energy,
    pub panel_count: u32,
    #[serde(rename = "battery_capacity_ah")]
    pub battery_capacity: Capacity,
    pub battery_count: u32,
    #[serde(rename = "inverter_size_w")]
    pub inverter_size: Power,
    pub recommended_voltage: BankVoltage,
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily energy:        {}", self.daily_energy)?;
        writeln!(f, "Nighttime energy:    {}", self.nighttime_energy)?;
        writeln!(f, "Solar panels:        {}", self.panel_count)?;
        writeln!(f, "Battery capacity:    {}", self.battery_capacity)?;
        writeln!(f, "Batteries:           {}", self.battery_count)?;
        writeln!(f, "Inverter size:       {}", self.inverter_size)?;
        write!(f, "Recommended bank:    {}", self.recommended_voltage)
    }
}
