//! Monetary amounts in Brazilian reais.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MeasurementError;

/// Amount in integer centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero reais.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    /// Returns the amount in centavos.
    #[must_use]
    pub const fn centavos(self) -> u64 {
        self.0
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when the sum does not fit.
    pub const fn checked_add(self, other: Self) -> Result<Self, MeasurementError> {
        match self.0.checked_add(other.0) {
            Some(sum) => Ok(Self(sum)),
            None => Err(MeasurementError::Overflow),
        }
    }
}

/// Formats as `R$ 1.234,56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reais = self.0.div_euclid(100);
        let centavos = self.0.rem_euclid(100);
        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len().div_euclid(3));
        for (position, digit) in digits.chars().enumerate() {
            if position > 0 && (digits.len() - position).rem_euclid(3) == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "R$ {grouped},{centavos:02}")
    }
}
