//! Advisory nominal bank voltage from the inverter rating.

use serde::{Deserialize, Serialize};

use crate::domain::types::{Power, Voltage};

// Breakpoints between bank voltage classes, in kVA at unity power factor
const LOW_BANK_LIMIT_KVA: f64 = 1.5;
const MID_BANK_LIMIT_KVA: f64 = 5.0;

/// Recommended nominal battery-bank voltage class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BankVoltage {
    #[serde(rename = "12V")]
    V12,
    #[serde(rename = "24V")]
    V24,
    #[serde(rename = "48V")]
    V48,
}

impl BankVoltage {
    pub fn as_volts(&self) -> Voltage {
        match self {
            BankVoltage::V12 => Voltage::volts(12.0),
            BankVoltage::V24 => Voltage::volts(24.0),
            BankVoltage::V48 => Voltage::volts(48.0),
        }
    }
}

impl std::fmt::Display for BankVoltage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankVoltage::V12 => write!(f, "12V"),
            BankVoltage::V24 => write!(f, "24V"),
            BankVoltage::V48 => write!(f, "48V"),
        }
    }
}

impl std::str::FromStr for BankVoltage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "12" | "12v" => Ok(BankVoltage::V12),
            "24" | "24v" => Ok(BankVoltage::V24),
            "48" | "48v" => Ok(BankVoltage::V48),
            _ => Err(format!("Unknown bank voltage: {}", s)),
        }
    }
}

/// Map an inverter rating to a recommended bank voltage.
///
/// Purely advisory; the battery sizer always uses the explicitly
/// configured voltage.
pub fn recommend(inverter_size: Power) -> BankVoltage {
    let kva = inverter_size.as_kilowatts();
    if kva <= LOW_BANK_LIMIT_KVA {
        BankVoltage::V12
    } else if kva <= MID_BANK_LIMIT_KVA {
        BankVoltage::V24
    } else {
        BankVoltage::V48
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(600.0, BankVoltage::V12)]
    #[case(1500.0, BankVoltage::V12)]
    #[case(1500.1, BankVoltage::V24)]
    #[case(5000.0, BankVoltage::V24)]
    #[case(5000.1, BankVoltage::V48)]
    #[case(12000.0, BankVoltage::V48)]
    fn recommend_breakpoints(#[case] watts: f64, #[case] expected: BankVoltage) {
        assert_eq!(recommend(Power::watts(watts)), expected);
    }

    #[test]
    fn test_zero_load_recommends_smallest_bank() {
        assert_eq!(recommend(Power::watts(0.0)), BankVoltage::V12);
    }

    #[test]
    fn test_as_volts() {
        assert_eq!(BankVoltage::V24.as_volts().as_volts(), 24.0);
    }

    #[test]
    fn test_parsing_and_display() {
        use std::str::FromStr;

        assert_eq!(BankVoltage::from_str("12v").unwrap(), BankVoltage::V12);
        assert_eq!(BankVoltage::from_str("48").unwrap(), BankVoltage::V48);
        assert!(BankVoltage::from_str("36").is_err());
        assert_eq!(format!("{}", BankVoltage::V24), "24V");
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&BankVoltage::V48).unwrap();
        assert_eq!(json, "\"48V\"");
        let parsed: BankVoltage = serde_json::from_str("\"12V\"").unwrap();
        assert_eq!(parsed, BankVoltage::V12);
    }
}
