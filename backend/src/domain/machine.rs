//! Machines owned by clients.
//!
//! A machine is identified by its owner and serial number. Brand and class are
//! descriptive: the first values written for a (client, serial) pair stick.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ClientId;
use super::text::non_blank;

/// Validation errors raised while building machine values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineValidationError {
    #[error("serial number must not be empty")]
    EmptySerialNumber,
}

/// Surrogate key of a `maszyny` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(i64);

impl MachineId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Serial number; together with the owner it forms the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(serial: impl Into<String>) -> Result<Self, MachineValidationError> {
        let serial = serial.into();
        if serial.trim().is_empty() {
            return Err(MachineValidationError::EmptySerialNumber);
        }
        Ok(Self(serial))
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = MachineValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Descriptive attributes of a machine, independent of its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDescription {
    brand: Option<String>,
    class: Option<String>,
    serial_number: SerialNumber,
}

impl MachineDescription {
    /// Blank brand or class values are stored as null.
    pub fn new(brand: Option<String>, class: Option<String>, serial_number: SerialNumber) -> Self {
        Self {
            brand: non_blank(brand),
            class: non_blank(class),
            serial_number,
        }
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }
}

/// Machine to resolve for a known client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDraft {
    pub client_id: ClientId,
    pub description: MachineDescription,
}

impl MachineDraft {
    pub fn new(client_id: ClientId, description: MachineDescription) -> Self {
        Self {
            client_id,
            description,
        }
    }
}

/// Stored machine as listed by `GET /maszyny`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Machine {
    #[schema(value_type = i64, example = 3)]
    pub id: MachineId,
    #[serde(rename = "klient_id")]
    #[schema(value_type = i64, example = 1)]
    pub client_id: ClientId,
    #[serde(rename = "marka")]
    #[schema(example = "Bosch")]
    pub brand: Option<String>,
    #[serde(rename = "klasa")]
    #[schema(example = "wiertarka")]
    pub class: Option<String>,
    #[serde(rename = "numer_seryjny")]
    #[schema(example = "SN-001")]
    pub serial_number: String,
}

impl Machine {
    /// Build the stored row for a freshly inserted draft.
    pub fn from_draft(id: MachineId, draft: &MachineDraft) -> Self {
        Self {
            id,
            client_id: draft.client_id,
            brand: draft.description.brand.clone(),
            class: draft.description.class.clone(),
            serial_number: draft.description.serial_number.to_string(),
        }
    }
}
