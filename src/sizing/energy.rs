//! Load aggregation: daily and nighttime energy demand.

use crate::domain::load::{LoadProfile, NightUsagePolicy};
use crate::domain::types::Energy;

/// Total daily energy demand across the profile.
///
/// Each appliance contributes wattage x daily hours x quantity.
pub fn daily_energy(loads: &LoadProfile) -> Energy {
    let wh = loads
        .iter()
        .map(|a| a.power.as_watts() * a.hours_per_day * f64::from(a.quantity))
        .sum();
    Energy::watt_hours(wh)
}

/// Total nighttime energy demand, the share the battery bank must carry.
pub fn nighttime_energy(loads: &LoadProfile, policy: NightUsagePolicy, night_hours: f64) -> Energy {
    let wh = loads
        .iter()
        .map(|a| {
            let hours = match policy {
                NightUsagePolicy::UniformHours => night_hours,
                NightUsagePolicy::PerApplianceOptIn => {
                    if a.use_at_night {
                        a.night_hours.unwrap_or(night_hours)
                    } else {
                        0.0
                    }
                }
            };
            a.power.as_watts() * hours * f64::from(a.quantity)
        })
        .sum();
    Energy::watt_hours(wh)
}
