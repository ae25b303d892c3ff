//! Ticket urgency levels and their response targets.

use super::ParseUrgencyLevelError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity class fixed when a ticket is opened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    /// Emergency, answered within two hours.
    Emergencial,
    /// Urgent, answered within one day.
    Urgencia,
    /// Preventive maintenance, answered within fifteen days.
    #[default]
    Preventiva,
}

impl UrgencyLevel {
    /// Every level, most severe first.
    pub const ALL: [Self; 3] = [Self::Emergencial, Self::Urgencia, Self::Preventiva];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergencial => "EMERGENCIAL",
            Self::Urgencia => "URGENCIA",
            Self::Preventiva => "PREVENTIVA",
        }
    }

    /// Returns the badge text shown on board cards.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Emergencial => "EMERGENCIAL (2H)",
            Self::Urgencia => "URGÊNCIA (24H)",
            Self::Preventiva => "PREVENTIVA (15D)",
        }
    }

    /// Returns the implied response target. It is informative only; nothing
    /// in the board enforces it.
    #[must_use]
    pub fn response_target(self) -> TimeDelta {
        match self {
            Self::Emergencial => TimeDelta::hours(2),
            Self::Urgencia => TimeDelta::days(1),
            Self::Preventiva => TimeDelta::days(15),
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UrgencyLevel {
    type Error = ParseUrgencyLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "EMERGENCIAL" => Ok(Self::Emergencial),
            "URGENCIA" => Ok(Self::Urgencia),
            "PREVENTIVA" => Ok(Self::Preventiva),
            _ => Err(ParseUrgencyLevelError(value.to_owned())),
        }
    }
}
