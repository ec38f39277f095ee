//! Ticket mutations: create, intake, partial update and delete.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{TicketCommand, TicketRepository};
use crate::domain::{Error, IntakeReceipt, IntakeRequest, NewTicket, TicketId, TicketUpdate};

fn ticket_not_found(id: TicketId) -> Error {
    Error::not_found(format!("ticket {id} not found"))
}

#[derive(Clone)]
pub struct TicketService<T> {
    tickets: Arc<T>,
}

impl<T> TicketService<T> {
    pub fn new(tickets: Arc<T>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl<T> TicketCommand for TicketService<T>
where
    T: TicketRepository,
{
    async fn create(&self, ticket: NewTicket) -> Result<TicketId, Error> {
        let id = self.tickets.create(&ticket).await?;
        info!(ticket_id = %id, machine_id = %ticket.machine_id, "ticket created");
        Ok(id)
    }

    async fn intake(&self, request: IntakeRequest) -> Result<IntakeReceipt, Error> {
        let receipt = self.tickets.intake(&request).await?;
        info!(
            ticket_id = %receipt.ticket_id,
            machine_id = %receipt.machine_id,
            client_id = %receipt.client_id,
            "ticket intake recorded"
        );
        Ok(receipt)
    }

    async fn update(&self, id: TicketId, update: TicketUpdate) -> Result<(), Error> {
        if !self.tickets.update(id, &update).await? {
            return Err(ticket_not_found(id));
        }
        info!(ticket_id = %id, "ticket updated");
        Ok(())
    }

    async fn delete(&self, id: TicketId) -> Result<(), Error> {
        if !self.tickets.delete(id).await? {
            return Err(ticket_not_found(id));
        }
        info!(ticket_id = %id, "ticket deleted");
        Ok(())
    }
}
