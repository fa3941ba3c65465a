//! Money
//!
//! Fixed-point amounts in integer cents.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::StoreConfig;

/// Non-negative amount of money, stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    /// Whole currency units, e.g. `Money::from_units(25)` is 25.00
    pub const fn from_units(units: u64) -> Self {
        Money(units * 100)
    }

    /// Price of `quantity` units; saturates instead of wrapping
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Amount with two decimals and no currency prefix ("75.00")
    fn to_decimal_string(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", StoreConfig::CURRENCY_PREFIX, self.to_decimal_string())
    }
}

/// Numeric in logs: whole amounts as integers, the rest as decimals
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}
