//! Error types for measurement handling.

use thiserror::Error;

use super::SinapiCode;
use crate::access::PermissionDenied;

/// Errors returned by measurement values and the ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MeasurementError {
    /// The SINAPI code is empty after trimming.
    #[error("SINAPI code must not be empty")]
    EmptyCode,

    /// The quantity text is not a non-negative decimal with at most three
    /// fractional digits.
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    /// The ledger has no line with this code.
    #[error("unknown SINAPI item: {0}")]
    UnknownItem(SinapiCode),

    /// The acting role may not edit this quantity.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// A monetary amount does not fit in 64 bits of centavos.
    #[error("monetary amount overflow")]
    Overflow,
}
