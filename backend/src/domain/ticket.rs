//! Repair tickets.
//!
//! Tickets reference a machine and carry the intake date, an optional
//! completion date, a free-text status and optional fault/notes text.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::text::non_blank;
use super::{ClientId, ClientName, MachineDescription, MachineId};

/// Validation errors raised while building ticket values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketValidationError {
    #[error("status must not be empty")]
    EmptyStatus,
    #[error("update must set at least one field")]
    EmptyUpdate,
}

/// Surrogate key of a `naprawy` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text workflow status such as `new`, `in_progress` or `done`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketStatus(String);

impl TicketStatus {
    /// Status given to tickets created without one.
    pub const NEW: &'static str = "new";

    pub fn new(status: impl Into<String>) -> Result<Self, TicketValidationError> {
        let status = status.into();
        if status.trim().is_empty() {
            return Err(TicketValidationError::EmptyStatus);
        }
        Ok(Self(status))
    }

    /// Use `status` when it carries text, otherwise fall back to [`Self::NEW`].
    pub fn or_new(status: Option<String>) -> Self {
        Self(non_blank(status).unwrap_or_else(|| Self::NEW.to_owned()))
    }
}

impl AsRef<str> for TicketStatus {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TicketStatus> for String {
    fn from(value: TicketStatus) -> Self {
        value.0
    }
}

impl TryFrom<String> for TicketStatus {
    type Error = TicketValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Raw ticket attributes as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub date_received: NaiveDate,
    pub date_completed: Option<NaiveDate>,
    pub status: Option<String>,
    pub fault: Option<String>,
    pub notes: Option<String>,
}

/// Normalised ticket attributes ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetails {
    date_received: NaiveDate,
    date_completed: Option<NaiveDate>,
    status: TicketStatus,
    fault: Option<String>,
    notes: Option<String>,
}

impl TicketDetails {
    pub fn date_received(&self) -> NaiveDate {
        self.date_received
    }

    pub fn date_completed(&self) -> Option<NaiveDate> {
        self.date_completed
    }

    pub fn status(&self) -> &TicketStatus {
        &self.status
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl From<TicketDraft> for TicketDetails {
    fn from(draft: TicketDraft) -> Self {
        Self {
            date_received: draft.date_received,
            date_completed: draft.date_completed,
            status: TicketStatus::or_new(draft.status),
            fault: non_blank(draft.fault),
            notes: non_blank(draft.notes),
        }
    }
}

/// Ticket for an already known machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub machine_id: MachineId,
    pub details: TicketDetails,
}

impl NewTicket {
    pub fn new(machine_id: MachineId, draft: TicketDraft) -> Self {
        Self {
            machine_id,
            details: draft.into(),
        }
    }
}

/// Stored ticket row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub machine_id: MachineId,
    pub details: TicketDetails,
}

impl Ticket {
    /// Apply the fields present in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: &TicketUpdate) {
        if let Some(status) = &update.status {
            self.details.status = status.clone();
        }
        if let Some(date_completed) = update.date_completed {
            self.details.date_completed = date_completed;
        }
        if let Some(fault) = &update.fault {
            self.details.fault = fault.clone();
        }
        if let Some(notes) = &update.notes {
            self.details.notes = notes.clone();
        }
    }
}

/// Partial ticket update.
///
/// The outer `Option` records whether a field was sent at all; the inner one
/// carries an explicit null that clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    status: Option<TicketStatus>,
    date_completed: Option<Option<NaiveDate>>,
    fault: Option<Option<String>>,
    notes: Option<Option<String>>,
}

impl TicketUpdate {
    /// Build an update; blank fault or notes text clears the column.
    pub fn new(
        status: Option<TicketStatus>,
        date_completed: Option<Option<NaiveDate>>,
        fault: Option<Option<String>>,
        notes: Option<Option<String>>,
    ) -> Result<Self, TicketValidationError> {
        let update = Self {
            status,
            date_completed,
            fault: fault.map(non_blank),
            notes: notes.map(non_blank),
        };
        if update.is_empty() {
            return Err(TicketValidationError::EmptyUpdate);
        }
        Ok(update)
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.date_completed.is_none()
            && self.fault.is_none()
            && self.notes.is_none()
    }

    pub fn status(&self) -> Option<&TicketStatus> {
        self.status.as_ref()
    }

    pub fn date_completed(&self) -> Option<Option<NaiveDate>> {
        self.date_completed
    }

    pub fn fault(&self) -> Option<Option<&str>> {
        self.fault.as_ref().map(Option::as_deref)
    }

    pub fn notes(&self) -> Option<Option<&str>> {
        self.notes.as_ref().map(Option::as_deref)
    }
}

/// Ticket submitted together with the client and machine description.
///
/// The client and machine are resolved, and the ticket inserted, as one unit
/// of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRequest {
    pub client: ClientName,
    pub machine: MachineDescription,
    pub details: TicketDetails,
}

impl IntakeRequest {
    pub fn new(client: ClientName, machine: MachineDescription, draft: TicketDraft) -> Self {
        Self {
            client,
            machine,
            details: draft.into(),
        }
    }
}

/// Identifiers produced by an intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeReceipt {
    pub client_id: ClientId,
    pub machine_id: MachineId,
    pub ticket_id: TicketId,
}
