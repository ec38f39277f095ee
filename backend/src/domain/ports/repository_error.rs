//! Error type and result helpers shared by the driven workshop ports.

use tracing::error;

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Failures raised by workshop store adapters.
    pub enum WorkshopRepositoryError {
        /// A connection could not be checked out of the pool.
        Connection { message: String } => "workshop store connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } => "workshop store query failed: {message}",
        /// A ticket referenced a machine id with no row behind it.
        MissingMachine { machine_id: i64 } => "machine {machine_id} does not exist",
        /// A machine referenced a client id with no row behind it.
        MissingClient { client_id: i64 } => "client {client_id} does not exist",
    }
}

/// Outcome of a get-or-create lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<Id> {
    pub id: Id,
    /// `true` when the row was inserted by this call.
    pub created: bool,
}

impl<Id> Resolution<Id> {
    pub fn existing(id: Id) -> Self {
        Self { id, created: false }
    }

    pub fn created(id: Id) -> Self {
        Self { id, created: true }
    }
}

impl From<WorkshopRepositoryError> for Error {
    fn from(err: WorkshopRepositoryError) -> Self {
        match err {
            WorkshopRepositoryError::MissingMachine { machine_id } => {
                Error::not_found(format!("machine {machine_id} not found"))
            }
            WorkshopRepositoryError::MissingClient { client_id } => {
                Error::not_found(format!("client {client_id} not found"))
            }
            WorkshopRepositoryError::Connection { .. } | WorkshopRepositoryError::Query { .. } => {
                error!(error = %err, "workshop store failure");
                Error::internal(err.to_string())
            }
        }
    }
}
