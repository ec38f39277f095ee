//! PostgreSQL-backed [`ClientRepository`].

use async_trait::async_trait;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::domain::ports::{ClientRepository, Resolution, WorkshopRepositoryError};
use crate::domain::{ClientId, ClientName};

use super::pool::DbPool;
use super::resolution::resolve_client_in;

#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn resolve(
        &self,
        name: &ClientName,
    ) -> Result<Resolution<ClientId>, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| async move { resolve_client_in(conn, name).await }.scope_boxed())
            .await
    }
}
