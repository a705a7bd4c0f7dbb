use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Power in Watts (W)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Power(pub f64);

impl Power {
    pub fn watts(w: f64) -> Self {
        Self(w)
    }

    pub fn kilowatts(kw: f64) -> Self {
        Self(kw * 1000.0)
    }

    pub fn as_watts(&self) -> f64 {
        self.0
    }

    pub fn as_kilowatts(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= 1000.0 {
            write!(f, "{:.2} kW", self.as_kilowatts())
        } else {
            write!(f, "{:.1} W", self.0)
        }
    }
}

impl Add for Power {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Power {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Energy in Watt-hours (Wh)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Energy(pub f64);

impl Energy {
    pub fn watt_hours(wh: f64) -> Self {
        Self(wh)
    }

    pub fn kilowatt_hours(kwh: f64) -> Self {
        Self(kwh * 1000.0)
    }

    pub fn as_watt_hours(&self) -> f64 {
        self.0
    }

    pub fn as_kilowatt_hours(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= 1000.0 {
            write!(f, "{:.2} kWh", self.as_kilowatt_hours())
        } else {
            write!(f, "{:.1} Wh", self.0)
        }
    }
}

impl Add for Energy {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Energy {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Voltage in Volts (V)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Voltage(pub f64);

impl Voltage {
    pub fn volts(v: f64) -> Self {
        Self(v)
    }

    pub fn as_volts(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} V", self.0)
    }
}

/// Charge capacity in Ampere-hours (Ah)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Capacity(pub f64);

impl Capacity {
    pub fn amp_hours(ah: f64) -> Self {
        Self(ah)
    }

    pub fn as_amp_hours(&self) -> f64 {
        self.0
    }

    /// Equivalent stored energy at a given nominal voltage
    pub fn energy_at(&self, voltage: Voltage) -> Energy {
        Energy::watt_hours(self.0 * voltage.as_volts())
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Ah", self.0)
    }
}

impl Add for Capacity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Dimensionless ratio (efficiency, depth of discharge), nominally 0..=1
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Ratio(pub f64);

impl Ratio {
    /// Build from a fraction, clamped into 0..=1
    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Build from a percentage, clamped into 0..=100
    pub fn from_percent(percent: f64) -> Self {
        Self((percent / 100.0).clamp(0.0, 1.0))
    }

    pub fn as_fraction(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.as_percent())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
