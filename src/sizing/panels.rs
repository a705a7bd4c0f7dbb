//! Panel sizing: daily energy demand to a whole-panel count.

use crate::domain::assumptions::Assumptions;
use crate::domain::types::Energy;

use super::rounding::ceil_ratio;

/// Expected daily production of a single panel under the given assumptions
pub fn panel_daily_production(assumptions: &Assumptions) -> Energy {
    Energy::watt_hours(
        assumptions.panel_power.as_watts()
            * assumptions.peak_sun_hours
            * assumptions.system_efficiency.as_fraction(),
    )
}

/// Number of panels needed to cover the daily demand.
///
/// A fractional panel must be purchased whole, so the ratio is always
/// rounded up. Zero or negative per-panel production means the array cannot
/// be sized at all and answers 0, for the caller to surface as a warning.
pub fn panel_count(daily_demand: Energy, assumptions: &Assumptions) -> u32 {
    let production = panel_daily_production(assumptions).as_watt_hours();
    if production <= 0.0 {
        return 0;
    }
    ceil_ratio(daily_demand.as_watt_hours(), production)
}
