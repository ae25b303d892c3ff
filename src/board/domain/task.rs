//! Ticket aggregate and its validated form input.

use super::{TaskDomainError, TaskId, TaskStatus, UrgencyLevel};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated free-text fields captured by the ticket creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaskDetails")]
pub struct TaskDetails {
    title: String,
    site_name: String,
    location: String,
}

impl TaskDetails {
    /// Creates details from the two required form fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySiteName`] or
    /// [`TaskDomainError::EmptyTitle`] when either field is blank after
    /// trimming.
    pub fn new(
        site_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            site_name: non_blank(site_name.into()).ok_or(TaskDomainError::EmptySiteName)?,
            title: non_blank(title.into()).ok_or(TaskDomainError::EmptyTitle)?,
            location: String::new(),
        })
    }

    /// Sets the optional location inside the work site.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into().trim().to_owned();
        self
    }

    /// Returns the ticket title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning work-site name.
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Returns the location inside the work site; may be empty.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Wire shape of [`TaskDetails`], validated on the way in.
#[derive(Deserialize)]
struct RawTaskDetails {
    title: String,
    site_name: String,
    #[serde(default)]
    location: String,
}

impl TryFrom<RawTaskDetails> for TaskDetails {
    type Error = TaskDomainError;

    fn try_from(raw: RawTaskDetails) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.site_name, raw.title)?.with_location(raw.location))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}

/// Maintenance ticket.
///
/// Identifier, details, urgency and creation time are fixed for the life of
/// the ticket. Only the status changes, and only through
/// [`Task::with_status`], which yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    urgency: UrgencyLevel,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for rebuilding a ticket from seed or imported data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Ticket identifier.
    pub id: TaskId,
    /// Validated form fields.
    pub details: TaskDetails,
    /// Urgency level.
    pub urgency: UrgencyLevel,
    /// Current column.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Opens a new ticket in the [`TaskStatus::AFazer`] column.
    #[must_use]
    pub fn open(
        id: TaskId,
        details: TaskDetails,
        urgency: UrgencyLevel,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            details,
            urgency,
            status: TaskStatus::AFazer,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a ticket from previously captured data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            urgency: data.urgency,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the validated form fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the ticket title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the owning work-site name.
    #[must_use]
    pub fn site_name(&self) -> &str {
        self.details.site_name()
    }

    /// Returns the location inside the work site.
    #[must_use]
    pub fn location(&self) -> &str {
        self.details.location()
    }

    /// Returns the urgency level.
    #[must_use]
    pub const fn urgency(&self) -> UrgencyLevel {
        self.urgency
    }

    /// Returns the current column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this ticket placed in `status`.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Returns the moment the urgency response target expires.
    #[must_use]
    pub fn response_deadline(&self) -> DateTime<Utc> {
        self.created_at
            .checked_add_signed(self.urgency.response_target())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns `true` when the ticket is still open past its response target.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && now > self.response_deadline()
    }
}
