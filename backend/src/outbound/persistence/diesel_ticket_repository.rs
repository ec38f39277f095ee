//! PostgreSQL-backed [`TicketRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{TicketRepository, WorkshopRepositoryError};
use crate::domain::{
    IntakeReceipt, IntakeRequest, MachineDraft, NewTicket, TicketId, TicketUpdate,
};

use super::models::TicketChangeset;
use super::pool::DbPool;
use super::resolution::{insert_ticket_in, resolve_client_in, resolve_machine_in};
use super::schema::naprawy;

#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| {
            async move { insert_ticket_in(conn, ticket.machine_id, &ticket.details).await }
                .scope_boxed()
        })
        .await
    }

    async fn intake(
        &self,
        request: &IntakeRequest,
    ) -> Result<IntakeReceipt, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| {
            async move {
                let client = resolve_client_in(conn, &request.client).await?;
                let draft = MachineDraft::new(client.id, request.machine.clone());
                let machine = resolve_machine_in(conn, &draft).await?;
                let ticket_id = insert_ticket_in(conn, machine.id, &request.details).await?;
                Ok(IntakeReceipt {
                    client_id: client.id,
                    machine_id: machine.id,
                    ticket_id,
                })
            }
            .scope_boxed()
        })
        .await
    }

    async fn update(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> Result<bool, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        let changes = TicketChangeset {
            status: update.status().map(AsRef::as_ref),
            data_zakonczenia: update.date_completed(),
            usterka: update.fault(),
            opis: update.notes(),
        };
        let affected = diesel::update(naprawy::table.find(id.get()))
            .set(&changes)
            .execute(&mut conn)
            .await?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: TicketId) -> Result<bool, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        let affected = diesel::delete(naprawy::table.find(id.get()))
            .execute(&mut conn)
            .await?;
        Ok(affected > 0)
    }
}
