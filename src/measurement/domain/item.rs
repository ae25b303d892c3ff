//! Contract lines priced from the SINAPI reference table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MeasurementError, Money, Quantity};

/// SINAPI composition code, e.g. `88316`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SinapiCode(String);

impl SinapiCode {
    /// Creates a validated code.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::EmptyCode`] when the code is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, MeasurementError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MeasurementError::EmptyCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SinapiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One priced line of a works contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementItem {
    code: SinapiCode,
    description: String,
    unit: String,
    unit_price: Money,
    contracted: Quantity,
    executed_by_contractor: Quantity,
    measured_by_inspector: Quantity,
}

impl MeasurementItem {
    /// Creates a line with nothing executed or measured yet.
    #[must_use]
    pub fn new(
        code: SinapiCode,
        description: impl Into<String>,
        unit: impl Into<String>,
        unit_price: Money,
        contracted: Quantity,
    ) -> Self {
        Self {
            code,
            description: description.into(),
            unit: unit.into(),
            unit_price,
            contracted,
            executed_by_contractor: Quantity::ZERO,
            measured_by_inspector: Quantity::ZERO,
        }
    }

    /// Sets the quantity the contractor reports as executed.
    #[must_use]
    pub const fn with_executed_by_contractor(mut self, quantity: Quantity) -> Self {
        self.executed_by_contractor = quantity;
        self
    }

    /// Sets the quantity the inspector has measured.
    #[must_use]
    pub const fn with_measured_by_inspector(mut self, quantity: Quantity) -> Self {
        self.measured_by_inspector = quantity;
        self
    }

    /// Returns the SINAPI code.
    #[must_use]
    pub const fn code(&self) -> &SinapiCode {
        &self.code
    }

    /// Returns the service description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit of measure, e.g. `M2`.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the price per unit.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the contracted quantity.
    #[must_use]
    pub const fn contracted(&self) -> Quantity {
        self.contracted
    }

    /// Returns the contractor-reported quantity.
    #[must_use]
    pub const fn executed_by_contractor(&self) -> Quantity {
        self.executed_by_contractor
    }

    /// Returns the inspector-measured quantity.
    #[must_use]
    pub const fn measured_by_inspector(&self) -> Quantity {
        self.measured_by_inspector
    }

    /// Returns the value of the measured quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when the value does not fit.
    pub fn measured_subtotal(&self) -> Result<Money, MeasurementError> {
        price_of(self.unit_price, self.measured_by_inspector)
    }

    /// Returns the value of the contracted quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when the value does not fit.
    pub fn contracted_total(&self) -> Result<Money, MeasurementError> {
        price_of(self.unit_price, self.contracted)
    }
}

/// Prices `quantity` at `unit_price`, rounding half up to the centavo.
fn price_of(unit_price: Money, quantity: Quantity) -> Result<Money, MeasurementError> {
    let scaled = u128::from(unit_price.centavos()) * u128::from(quantity.thousandths());
    let centavos = (scaled + 500).div_euclid(1_000);
    u64::try_from(centavos)
        .map(Money::from_centavos)
        .map_err(|_| MeasurementError::Overflow)
}
