//! Battery sizing: nighttime energy demand to a bank capacity and count.

use crate::domain::assumptions::{Assumptions, ReserveMargin};
use crate::domain::types::{Capacity, Energy};

use super::rounding::ceil_ratio;

/// Required bank capacity to carry the nighttime demand.
///
/// The demand is first inflated by the configured reserve margin, then
/// converted Wh -> Ah at the nominal bank voltage, derated by the depth of
/// discharge. Zero or negative voltage, DoD or round-trip efficiency cannot
/// be sized and answer 0 Ah.
pub fn required_capacity(nighttime_demand: Energy, assumptions: &Assumptions) -> Capacity {
    let voltage = assumptions.battery_voltage.as_volts();
    let dod = assumptions.depth_of_discharge.as_fraction();
    if voltage <= 0.0 || dod <= 0.0 {
        return Capacity::amp_hours(0.0);
    }

    let adjusted_wh = match assumptions.reserve_margin {
        ReserveMargin::FixedFactor { factor } => nighttime_demand.as_watt_hours() * factor,
        ReserveMargin::RoundTripLosses => {
            let efficiency = assumptions.round_trip_efficiency.as_fraction();
            if efficiency <= 0.0 {
                return Capacity::amp_hours(0.0);
            }
            nighttime_demand.as_watt_hours() / efficiency
        }
    };

    Capacity::amp_hours(adjusted_wh / (voltage * dod))
}

/// Number of batteries needed to provide the required capacity.
///
/// A non-positive single-battery rating cannot be sized and answers 0.
pub fn battery_count(required: Capacity, single_battery: Capacity) -> u32 {
    let single_ah = single_battery.as_amp_hours();
    if single_ah <= 0.0 {
        return 0;
    }
    ceil_ratio(required.as_amp_hours(), single_ah)
}
