//! Driven port for ticket persistence.

use async_trait::async_trait;

use crate::domain::{IntakeReceipt, IntakeRequest, NewTicket, TicketId, TicketUpdate};

use super::WorkshopRepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a ticket for an existing machine.
    ///
    /// Fails with [`WorkshopRepositoryError::MissingMachine`] when the machine
    /// id matches no row.
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, WorkshopRepositoryError>;

    /// Resolve the client, resolve the machine and insert the ticket in one
    /// transaction. Nothing is written when any step fails.
    async fn intake(&self, request: &IntakeRequest)
    -> Result<IntakeReceipt, WorkshopRepositoryError>;

    /// Write the fields present in `update`. Returns `false` when no ticket
    /// has this id.
    async fn update(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> Result<bool, WorkshopRepositoryError>;

    /// Returns `false` when no ticket has this id.
    async fn delete(&self, id: TicketId) -> Result<bool, WorkshopRepositoryError>;
}
