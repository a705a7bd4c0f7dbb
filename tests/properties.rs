//! Property tests for the sizing pipeline's algebraic guarantees.

use proptest::collection::vec;
use proptest::prelude::*;
use solar_sizer::sizing::{energy, panels, storage};
use solar_sizer::{
    Appliance, Assumptions, Capacity, Energy, LoadProfile, NightUsagePolicy, Power, SizingModel,
};

fn appliance_strategy() -> impl Strategy<Value = Appliance> {
    (
        "[a-z]{1,8}",
        1.0f64..2000.0,
        0.0f64..24.0,
        1u32..4,
        proptest::option::of(0.0f64..12.0),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(name, watts, hours, quantity, night_hours, use_at_night, high_surge)| {
                let mut appliance =
                    Appliance::new(name, Power::watts(watts), hours).with_quantity(quantity);
                appliance.night_hours = night_hours;
                appliance.use_at_night = use_at_night;
                appliance.high_surge = high_surge;
                appliance
            },
        )
}

fn profile_strategy() -> impl Strategy<Value = LoadProfile> {
    vec(appliance_strategy(), 0..8)
        .prop_map(|appliances| LoadProfile::from_appliances(appliances).unwrap())
}

proptest! {
    /// Daily demand never decreases when wattage or hours increase
    #[test]
    fn daily_energy_is_monotonic(
        watts in 1.0f64..2000.0,
        hours in 0.0f64..24.0,
        extra_watts in 0.0f64..1000.0,
        extra_hours in 0.0f64..6.0,
    ) {
        let base = LoadProfile::from_appliances(vec![
            Appliance::new("load", Power::watts(watts), hours),
        ]).unwrap();
        let heavier = LoadProfile::from_appliances(vec![
            Appliance::new("load", Power::watts(watts + extra_watts), hours),
        ]).unwrap();
        let longer = LoadProfile::from_appliances(vec![
            Appliance::new("load", Power::watts(watts), hours + extra_hours),
        ]).unwrap();

        prop_assert!(energy::daily_energy(&heavier) >= energy::daily_energy(&base));
        prop_assert!(energy::daily_energy(&longer) >= energy::daily_energy(&base));
    }

    /// Panel count behaves as a true ceiling of demand over production
    #[test]
    fn panel_count_is_a_ceiling(demand_wh in 0.0f64..100_000.0) {
        let assumptions = Assumptions::default();
        let production_wh = 1200.0; // 300 W x 5 PSH x 0.8
        let count = panels::panel_count(Energy::watt_hours(demand_wh), &assumptions);

        let exact = demand_wh / production_wh;
        // Covers the demand (up to the integer-snap tolerance)...
        prop_assert!(f64::from(count) >= exact - 1e-6);
        // ...and never overshoots by a whole panel
        prop_assert!(f64::from(count) < exact + 1.0 + 1e-6);
    }

    /// Battery count covers the required capacity without a spare battery
    #[test]
    fn battery_count_covers_required_capacity(night_wh in 0.0f64..50_000.0) {
        let assumptions = Assumptions::default();
        let required = storage::required_capacity(Energy::watt_hours(night_wh), &assumptions);
        let count = storage::battery_count(required, assumptions.single_battery);

        let single_ah = assumptions.single_battery.as_amp_hours();
        prop_assert!(f64::from(count) * single_ah >= required.as_amp_hours() - 1e-6);
        prop_assert!(f64::from(count) * single_ah < required.as_amp_hours() + single_ah + 1e-6);
    }

    /// The engine is referentially transparent: same inputs, same report
    #[test]
    fn sizing_is_idempotent(profile in profile_strategy()) {
        let model = SizingModel::new(Assumptions::default());

        let first = model.size(&profile).unwrap();
        let second = model.size(&profile).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Nighttime demand under opt-in never exceeds the uniform accounting
    /// when overrides stay within the global night hours
    #[test]
    fn opt_in_demand_is_bounded_by_uniform(profile in profile_strategy()) {
        let night_hours = 12.0;
        let uniform = energy::nighttime_energy(&profile, NightUsagePolicy::UniformHours, night_hours);
        let opt_in = energy::nighttime_energy(&profile, NightUsagePolicy::PerApplianceOptIn, night_hours);

        prop_assert!(opt_in.as_watt_hours() <= uniform.as_watt_hours() + 1e-9);
    }

    /// Degenerate single-battery ratings never panic and answer zero
    #[test]
    fn degenerate_battery_rating_is_guarded(required_ah in 0.0f64..10_000.0, rating in -100.0f64..=0.0) {
        let count = storage::battery_count(
            Capacity::amp_hours(required_ah),
            Capacity::amp_hours(rating),
        );
        prop_assert_eq!(count, 0);
    }
}
