//! # solar-sizer
//!
//! A pure sizing pipeline for small off-grid solar PV systems: turn an
//! appliance load list and a set of system assumptions into daily and
//! nighttime energy demand, a panel count, a battery bank capacity and
//! count, an inverter rating and a recommended bank voltage.
//!
//! The engine performs no I/O and holds no hidden state; identical inputs
//! always produce identical reports.
//!
//! ```
//! use solar_sizer::{Appliance, Assumptions, Power, SizingModel};
//!
//! let model = SizingModel::new(Assumptions::default());
//! let report = model
//!     .size_appliances(vec![Appliance::new("Fridge", Power::watts(150.0), 8.0)])
//!     .unwrap();
//! assert_eq!(report.panel_count, 1);
//! ```

pub mod config;
pub mod domain;
pub mod request;
pub mod sizing;
pub mod telemetry;

pub use domain::assumptions::{Assumptions, AssumptionsError, BatteryChemistry, ReserveMargin};
pub use domain::load::{Appliance, LoadError, LoadProfile, NightUsagePolicy};
pub use domain::types::{Capacity, Energy, Power, Ratio, Voltage};
pub use sizing::bank_voltage::BankVoltage;
pub use sizing::model::{SizingError, SizingModel};
pub use sizing::report::SizingReport;
