//! Pure permission predicates.
//!
//! Every answer is a total function of its inputs: no session state, no
//! clock, no configuration.

use super::{Action, PermissionDenied, Role, Section};

/// Returns whether `role` may perform `action`.
///
/// | role            | create | drag/advance | delete | measure (fiscal) | measure (empresa) |
/// |-----------------|--------|--------------|--------|------------------|-------------------|
/// | `SECRETARIO`    | no     | no           | no     | no               | no                |
/// | `DIRETOR`       | yes    | yes          | yes    | no               | no                |
/// | `FISCAL`        | yes    | yes          | yes    | yes              | no                |
/// | `EMPRESA`       | no     | yes          | yes    | no               | yes               |
/// | `ORGAO_INTERNO` | no     | no           | no     | no               | no                |
#[must_use]
pub const fn can_perform(role: Role, action: Action) -> bool {
    match action {
        Action::CreateTask => matches!(role, Role::Diretor | Role::Fiscal),
        Action::DragReorder | Action::AdvanceStatus | Action::DeleteTask => {
            matches!(role, Role::Diretor | Role::Fiscal | Role::Empresa)
        }
        Action::EditMeasurementAsFiscal => matches!(role, Role::Fiscal),
        Action::EditMeasurementAsEmpresa => matches!(role, Role::Empresa),
    }
}

/// Returns whether `role` may open `section`.
#[must_use]
pub const fn can_view(role: Role, section: Section) -> bool {
    match section {
        Section::Dashboard => true,
        Section::Measurements | Section::Maintenance => !matches!(role, Role::OrgaoInterno),
        Section::PhotoReports => matches!(role, Role::Fiscal | Role::Empresa | Role::OrgaoInterno),
        Section::AuditMap => matches!(role, Role::OrgaoInterno | Role::Secretario | Role::Diretor),
    }
}

/// Checks `action` for `role`, turning a refusal into an error.
///
/// # Errors
///
/// Returns [`PermissionDenied`] when [`can_perform`] answers `false`.
pub const fn require(role: Role, action: Action) -> Result<(), PermissionDenied> {
    if can_perform(role, action) {
        Ok(())
    } else {
        Err(PermissionDenied { role, action })
    }
}

/// Lists the actions granted to `role`, in [`Action::ALL`] order.
#[must_use]
pub fn permitted_actions(role: Role) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| can_perform(role, *action))
        .collect()
}

/// Lists the sections `role` may open, in navigation order.
#[must_use]
pub fn visible_sections(role: Role) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| can_view(role, *section))
        .collect()
}
