//! Inverter sizing: worst-case simultaneous load plus headroom.

use crate::domain::load::LoadProfile;
use crate::domain::types::Power;

/// Recommended continuous inverter rating.
///
/// All loads are assumed to run at once; inrush-heavy loads count at the
/// surge factor, and the whole sum carries the margin factor on top.
pub fn inverter_size(loads: &LoadProfile, margin: f64, surge_factor: f64) -> Power {
    let watts: f64 = loads
        .iter()
        .map(|a| {
            let surge = if a.high_surge { surge_factor } else { 1.0 };
            a.power.as_watts() * f64::from(a.quantity) * surge
        })
        .sum();
    Power::watts(watts * margin)
}
