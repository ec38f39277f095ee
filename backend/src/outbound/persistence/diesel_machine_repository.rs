//! PostgreSQL-backed [`MachineRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{MachineRepository, Resolution, WorkshopRepositoryError};
use crate::domain::{ClientId, Machine, MachineDraft, MachineId};

use super::models::MachineRow;
use super::pool::DbPool;
use super::resolution::resolve_machine_in;
use super::schema::maszyny;

#[derive(Clone)]
pub struct DieselMachineRepository {
    pool: DbPool,
}

impl DieselMachineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_machine(row: MachineRow) -> Machine {
    Machine {
        id: MachineId::new(row.id),
        client_id: ClientId::new(row.klient_id),
        brand: row.marka,
        class: row.klasa,
        serial_number: row.numer_seryjny,
    }
}

#[async_trait]
impl MachineRepository for DieselMachineRepository {
    async fn resolve(
        &self,
        draft: &MachineDraft,
    ) -> Result<Resolution<MachineId>, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| async move { resolve_machine_in(conn, draft).await }.scope_boxed())
            .await
    }

    async fn list(&self) -> Result<Vec<Machine>, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<MachineRow> = maszyny::table
            .order(maszyny::id.asc())
            .select(MachineRow::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows.into_iter().map(row_to_machine).collect())
    }
}
