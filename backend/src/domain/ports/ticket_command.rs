//! Driving port for ticket mutations.

use async_trait::async_trait;

use crate::domain::{Error, IntakeReceipt, IntakeRequest, NewTicket, TicketId, TicketUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketCommand: Send + Sync {
    /// Create a ticket for a known machine; an unknown machine is not found.
    async fn create(&self, ticket: NewTicket) -> Result<TicketId, Error>;

    /// Create a ticket from the client and machine description.
    async fn intake(&self, request: IntakeRequest) -> Result<IntakeReceipt, Error>;

    async fn update(&self, id: TicketId, update: TicketUpdate) -> Result<(), Error>;

    async fn delete(&self, id: TicketId) -> Result<(), Error>;
}
