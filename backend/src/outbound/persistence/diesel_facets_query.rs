//! PostgreSQL-backed [`FacetsQuery`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::FacetSource;
use crate::domain::ports::{FacetsQuery, WorkshopRepositoryError};

use super::pool::DbPool;
use super::schema::{klienci, maszyny, naprawy};

#[derive(Clone)]
pub struct DieselFacetsQuery {
    pool: DbPool,
}

impl DieselFacetsQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacetsQuery for DieselFacetsQuery {
    /// All five columns are read in one transaction so the lists agree with
    /// each other.
    async fn load(&self) -> Result<FacetSource, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| {
            async move {
                let brands = maszyny::table
                    .select(maszyny::marka)
                    .distinct()
                    .load::<Option<String>>(conn)
                    .await?;
                let classes = maszyny::table
                    .select(maszyny::klasa)
                    .distinct()
                    .load::<Option<String>>(conn)
                    .await?;
                let faults = naprawy::table
                    .select(naprawy::usterka)
                    .distinct()
                    .load::<Option<String>>(conn)
                    .await?;
                let client_names = klienci::table
                    .select(klienci::nazwa)
                    .distinct()
                    .load::<String>(conn)
                    .await?;
                let serial_numbers = maszyny::table
                    .select(maszyny::numer_seryjny)
                    .distinct()
                    .load::<String>(conn)
                    .await?;
                Ok(FacetSource {
                    brands,
                    classes,
                    faults,
                    client_names: client_names.into_iter().map(Some).collect(),
                    serial_numbers: serial_numbers.into_iter().map(Some).collect(),
                })
            }
            .scope_boxed()
        })
        .await
    }
}
