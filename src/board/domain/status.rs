//! Board columns and the forward progression between them.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket lifecycle stage. Each variant is one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Waiting to be picked up.
    AFazer,
    /// Work is under way on site.
    EmExecucao,
    /// Work has been finished.
    Concluido,
}

impl TaskStatus {
    /// Every column, left to right.
    pub const ALL: [Self; 3] = [Self::AFazer, Self::EmExecucao, Self::Concluido];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AFazer => "A_FAZER",
            Self::EmExecucao => "EM_EXECUCAO",
            Self::Concluido => "CONCLUIDO",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AFazer => "Pendentes",
            Self::EmExecucao => "Em Execução",
            Self::Concluido => "Concluídos",
        }
    }

    /// Returns the status the advance button moves to, or `None` when the
    /// ticket is done and no advance affordance exists.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::AFazer => Some(Self::EmExecucao),
            Self::EmExecucao => Some(Self::Concluido),
            Self::Concluido => None,
        }
    }

    /// Returns `true` for the final column.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Concluido)
    }

    /// Returns `true` when moving to `target` goes leftwards on the board.
    #[must_use]
    pub fn is_backward_to(self, target: Self) -> bool {
        target < self
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "A_FAZER" => Ok(Self::AFazer),
            "EM_EXECUCAO" => Ok(Self::EmExecucao),
            "CONCLUIDO" => Ok(Self::Concluido),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
