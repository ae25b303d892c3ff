//! Immutable measurement ledger snapshots.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{MeasurementError, MeasurementItem, Money, Quantity, SinapiCode};
use crate::access::{Action, Role, require};

/// Which of the two editable quantities a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    /// Quantity measured by the department inspector.
    InspectorMeasured,
    /// Quantity the contractor reports as executed.
    ContractorExecuted,
}

impl MeasurementField {
    /// Returns the capability required to edit this field.
    #[must_use]
    pub const fn required_action(self) -> Action {
        match self {
            Self::InspectorMeasured => Action::EditMeasurementAsFiscal,
            Self::ContractorExecuted => Action::EditMeasurementAsEmpresa,
        }
    }

    /// Returns the field the technical measurement table edits for `role`,
    /// or `None` for roles that only see consolidated reports.
    #[must_use]
    pub const fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Fiscal => Some(Self::InspectorMeasured),
            Role::Empresa => Some(Self::ContractorExecuted),
            Role::Secretario | Role::Diretor | Role::OrgaoInterno => None,
        }
    }
}

/// Ordered contract lines for one works contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementLedger {
    items: Arc<[MeasurementItem]>,
}

impl MeasurementLedger {
    /// Creates a ledger from contract lines in display order.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = MeasurementItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns a snapshot with `field` of line `code` set to `quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::PermissionDenied`] when `role` may not edit
    /// `field` and [`MeasurementError::UnknownItem`] when no line has `code`.
    pub fn record(
        &self,
        role: Role,
        field: MeasurementField,
        code: &SinapiCode,
        quantity: Quantity,
    ) -> Result<Self, MeasurementError> {
        require(role, field.required_action())?;
        if self.get(code).is_none() {
            return Err(MeasurementError::UnknownItem(code.clone()));
        }
        debug!(%role, %code, ?field, %quantity, "recording measurement");
        let items: Vec<MeasurementItem> = self
            .items
            .iter()
            .map(|item| {
                if item.code() != code {
                    return item.clone();
                }
                match field {
                    MeasurementField::InspectorMeasured => {
                        item.clone().with_measured_by_inspector(quantity)
                    }
                    MeasurementField::ContractorExecuted => {
                        item.clone().with_executed_by_contractor(quantity)
                    }
                }
            })
            .collect();
        Ok(Self {
            items: items.into(),
        })
    }

    /// Looks up a line by code.
    #[must_use]
    pub fn get(&self, code: &SinapiCode) -> Option<&MeasurementItem> {
        self.items.iter().find(|item| item.code() == code)
    }

    /// Returns the lines in display order.
    #[must_use]
    pub fn items(&self) -> &[MeasurementItem] {
        &self.items
    }

    /// Sums the value of all measured quantities.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when the total does not fit.
    pub fn total_measured(&self) -> Result<Money, MeasurementError> {
        self.sum(MeasurementItem::measured_subtotal)
    }

    /// Sums the value of all contracted quantities.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when the total does not fit.
    pub fn total_contracted(&self) -> Result<Money, MeasurementError> {
        self.sum(MeasurementItem::contracted_total)
    }

    /// Returns measured value as a whole percentage of contracted value,
    /// rounded down. An empty or zero-valued contract reports 0.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::Overflow`] when either total does not fit.
    pub fn progress_percent(&self) -> Result<u64, MeasurementError> {
        let measured = u128::from(self.total_measured()?.centavos());
        let contracted = u128::from(self.total_contracted()?.centavos());
        if contracted == 0 {
            return Ok(0);
        }
        u64::try_from((measured * 100).div_euclid(contracted))
            .map_err(|_| MeasurementError::Overflow)
    }

    fn sum(
        &self,
        value_of: impl Fn(&MeasurementItem) -> Result<Money, MeasurementError>,
    ) -> Result<Money, MeasurementError> {
        self.items
            .iter()
            .try_fold(Money::ZERO, |total, item| total.checked_add(value_of(item)?))
    }
}
