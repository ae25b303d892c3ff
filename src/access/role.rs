//! Actor roles selectable at sign-in.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission class of the acting user for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Municipal education secretary. Read-only everywhere.
    Secretario,
    /// Director of engineering.
    Diretor,
    /// Department site inspector.
    Fiscal,
    /// Contracted construction company.
    Empresa,
    /// External control body.
    OrgaoInterno,
}

impl Role {
    /// Every role, in sign-in menu order.
    pub const ALL: [Self; 5] = [
        Self::Secretario,
        Self::Diretor,
        Self::Fiscal,
        Self::Empresa,
        Self::OrgaoInterno,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secretario => "SECRETARIO",
            Self::Diretor => "DIRETOR",
            Self::Fiscal => "FISCAL",
            Self::Empresa => "EMPRESA",
            Self::OrgaoInterno => "ORGAO_INTERNO",
        }
    }

    /// Returns the label shown on the sign-in menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Secretario => "Secretário Municipal",
            Self::Diretor => "Diretor de Engenharia",
            Self::Fiscal => "Fiscal da Secretaria",
            Self::Empresa => "Empresa Contratada",
            Self::OrgaoInterno => "Órgão de Controle externo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SECRETARIO" => Ok(Self::Secretario),
            "DIRETOR" => Ok(Self::Diretor),
            "FISCAL" => Ok(Self::Fiscal),
            "EMPRESA" => Ok(Self::Empresa),
            "ORGAO_INTERNO" => Ok(Self::OrgaoInterno),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
