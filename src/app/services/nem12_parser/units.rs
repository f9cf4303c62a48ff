//! Unit-of-measure table for NEM12 interval quantities
//!
//! The allowed values in the UOM field form a closed set (specification
//! Appendix B). Lookup is case-insensitive. Only the watt-hour family has a
//! defined linear conversion to the canonical kilowatt hour; asking for a
//! kWh conversion on any other unit is an explicit error rather than a
//! guessed factor.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Allowed values in the UOM field of a data details record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOfMeasure {
    /// Megawatt hour
    MWh,
    /// Kilowatt hour (the canonical energy unit)
    KWh,
    /// Watt hour
    Wh,
    /// Megavolt ampere reactive hour
    MVArh,
    /// Kilovolt ampere reactive hour
    KVArh,
    /// Volt ampere reactive hour
    VArh,
    /// Megavolt ampere reactive
    MVAr,
    /// Kilovolt ampere reactive
    KVAr,
    /// Volt ampere reactive
    VAr,
    /// Megawatt
    MW,
    /// Kilowatt
    KW,
    /// Watt
    W,
    /// Megavolt ampere hour
    MVAh,
    /// Kilovolt ampere hour
    KVAh,
    /// Volt ampere hour
    VAh,
    /// Megavolt ampere
    MVA,
    /// Kilovolt ampere
    KVA,
    /// Volt ampere
    VA,
    /// Kilovolt
    KV,
    /// Volt
    V,
    /// Kiloampere
    KA,
    /// Ampere
    A,
    /// Power factor
    Pf,
}

/// The UOM token did not resolve to any unit in the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unresolvable unit of measure: {token}")]
pub struct UnknownUnit {
    pub token: String,
}

/// The unit has no defined kilowatt hour equivalence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no kilowatt hour conversion defined for unit {unit}")]
pub struct UnsupportedConversion {
    pub unit: UnitOfMeasure,
}

impl UnitOfMeasure {
    /// The canonical token for this unit as printed in the specification.
    pub fn token(&self) -> &'static str {
        match self {
            Self::MWh => "MWh",
            Self::KWh => "kWh",
            Self::Wh => "Wh",
            Self::MVArh => "MVArh",
            Self::KVArh => "kVArh",
            Self::VArh => "VArh",
            Self::MVAr => "MVAr",
            Self::KVAr => "kVAr",
            Self::VAr => "VAr",
            Self::MW => "MW",
            Self::KW => "kW",
            Self::W => "W",
            Self::MVAh => "MVAh",
            Self::KVAh => "kVAh",
            Self::VAh => "VAh",
            Self::MVA => "MVA",
            Self::KVA => "kVA",
            Self::VA => "VA",
            Self::KV => "kV",
            Self::V => "V",
            Self::KA => "kA",
            Self::A => "A",
            Self::Pf => "pf",
        }
    }

    /// Linear factor to kilowatt hours, defined only for the watt-hour
    /// family: 1 MWh = 1000 kWh, 1 kWh = 1 kWh, 1 Wh = 0.001 kWh.
    pub fn kilowatt_hour_factor(&self) -> Option<f64> {
        match self {
            Self::MWh => Some(1000.0),
            Self::KWh => Some(1.0),
            Self::Wh => Some(0.001),
            _ => None,
        }
    }

    /// Convert a quantity expressed in this unit to kilowatt hours.
    pub fn to_kilowatt_hours(&self, quantity: f64) -> Result<f64, UnsupportedConversion> {
        self.kilowatt_hour_factor()
            .map(|factor| quantity * factor)
            .ok_or(UnsupportedConversion { unit: *self })
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = UnknownUnit;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // The allowed values for UOM are not case sensitive
        match token.to_ascii_uppercase().as_str() {
            "MWH" => Ok(Self::MWh),
            "KWH" => Ok(Self::KWh),
            "WH" => Ok(Self::Wh),
            "MVARH" => Ok(Self::MVArh),
            "KVARH" => Ok(Self::KVArh),
            "VARH" => Ok(Self::VArh),
            "MVAR" => Ok(Self::MVAr),
            "KVAR" => Ok(Self::KVAr),
            "VAR" => Ok(Self::VAr),
            "MW" => Ok(Self::MW),
            "KW" => Ok(Self::KW),
            "W" => Ok(Self::W),
            "MVAH" => Ok(Self::MVAh),
            "KVAH" => Ok(Self::KVAh),
            "VAH" => Ok(Self::VAh),
            "MVA" => Ok(Self::MVA),
            "KVA" => Ok(Self::KVA),
            "VA" => Ok(Self::VA),
            "KV" => Ok(Self::KV),
            "V" => Ok(Self::V),
            "KA" => Ok(Self::KA),
            "A" => Ok(Self::A),
            "PF" => Ok(Self::Pf),
            _ => Err(UnknownUnit {
                token: token.to_string(),
            }),
        }
    }
}
