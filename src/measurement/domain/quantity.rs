//! Measured quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MeasurementError;

const SCALE: u64 = 1_000;

/// Non-negative quantity in thousandths of the item's unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// No quantity.
    pub const ZERO: Self = Self(0);

    /// Creates a quantity from thousandths of a unit.
    #[must_use]
    pub const fn from_thousandths(thousandths: u64) -> Self {
        Self(thousandths)
    }

    /// Creates a whole-unit quantity, saturating on overflow.
    #[must_use]
    pub const fn whole(units: u64) -> Self {
        Self(units.saturating_mul(SCALE))
    }

    /// Returns the quantity in thousandths of a unit.
    #[must_use]
    pub const fn thousandths(self) -> u64 {
        self.0
    }

    /// Parses user input such as `"120"`, `"12.5"` or `"0,75"`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::InvalidQuantity`] for empty, negative or
    /// non-numeric text, a separator with no digits on either side, more
    /// than three fractional digits, or values that do not fit.
    pub fn parse(raw: &str) -> Result<Self, MeasurementError> {
        let invalid = || MeasurementError::InvalidQuantity(raw.to_owned());
        let text = raw.trim();
        let (whole, fraction) = match text.split_once(['.', ',']) {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (text, ""),
        };
        let all_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 3 {
            return Err(invalid());
        }

        let units: u64 = whole.parse().map_err(|_| invalid())?;
        let padded = format!("{fraction:0<3}");
        let thousandths: u64 = padded.parse().map_err(|_| invalid())?;
        units
            .checked_mul(SCALE)
            .and_then(|scaled| scaled.checked_add(thousandths))
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Formats with up to three decimals and no trailing zeros, e.g. `12.5`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0.div_euclid(SCALE);
        let fraction = self.0.rem_euclid(SCALE);
        if fraction == 0 {
            return write!(f, "{units}");
        }
        let digits = format!("{fraction:03}");
        write!(f, "{units}.{}", digits.trim_end_matches('0'))
    }
}
