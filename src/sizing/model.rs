//! Sizing pipeline orchestrator.
//!
//! Runs the five stages in dependency order: load aggregation feeds the
//! panel and battery sizers, the inverter sizer reads the raw load list,
//! and the voltage selector reads the inverter result.

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::assumptions::{Assumptions, AssumptionsError};
use crate::domain::load::{Appliance, LoadError, LoadProfile};

use super::report::SizingReport;
use super::{bank_voltage, energy, inverter, panels, storage};

#[derive(Debug, Error)]
pub enum SizingError {
    #[error("invalid assumptions: {0}")]
    Assumptions(#[from] AssumptionsError),
    #[error("invalid load: {0}")]
    Load(#[from] LoadError),
}

/// Stateless sizing engine over a fixed set of assumptions.
///
/// Holds no mutable state, so one model can be shared across threads and
/// invoked any number of times; identical inputs produce identical reports.
#[derive(Debug, Clone)]
pub struct SizingModel {
    assumptions: Assumptions,
}

impl SizingModel {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Validate raw appliance records into a profile and size it
    pub fn size_appliances(&self, appliances: Vec<Appliance>) -> Result<SizingReport, SizingError> {
        let profile = LoadProfile::from_appliances(appliances)?;
        self.size(&profile)
    }

    /// Compute a full sizing report for an already-validated profile
    pub fn size(&self, loads: &LoadProfile) -> Result<SizingReport, SizingError> {
        self.assumptions.validate()?;

        let daily_energy = energy::daily_energy(loads);
        let nighttime_energy = energy::nighttime_energy(
            loads,
            self.assumptions.night_policy,
            self.assumptions.night_hours,
        );
        debug!(%daily_energy, %nighttime_energy, "aggregated load demand");

        let panel_count = panels::panel_count(daily_energy, &self.assumptions);
        if panel_count == 0 && daily_energy.as_watt_hours() > 0.0 {
            warn!(
                production = %panels::panel_daily_production(&self.assumptions),
                "per-panel production is zero, cannot size the panel array"
            );
        }

        let battery_capacity = storage::required_capacity(nighttime_energy, &self.assumptions);
        let battery_count =
            storage::battery_count(battery_capacity, self.assumptions.single_battery);
        if battery_count == 0 && nighttime_energy.as_watt_hours() > 0.0 {
            warn!(
                single_battery = %self.assumptions.single_battery,
                "insufficient battery configuration, cannot size the bank"
            );
        }

        let inverter_size = inverter::inverter_size(
            loads,
            self.assumptions.inverter_margin,
            self.assumptions.surge_factor,
        );
        let recommended_voltage = bank_voltage::recommend(inverter_size);
        debug!(%inverter_size, %recommended_voltage, "sized inverter");

        Ok(SizingReport {
            daily_energy,
            nighttime_energy,
            panel_count,
            battery_capacity,
            battery_count,
            inverter_size,
            recommended_voltage,
        })
    }
}
