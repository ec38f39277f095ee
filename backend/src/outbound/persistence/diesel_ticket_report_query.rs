//! PostgreSQL-backed [`TicketReportQuery`].
//!
//! Tickets are left-joined to machines and, through them, to clients, so a
//! dangling reference shows up with null descriptive columns instead of
//! disappearing from the report.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TicketReportQuery, WorkshopRepositoryError};
use crate::domain::{FilterField, FilterOperator, TicketFilter, TicketId, TicketReport};

use super::diesel_helpers::contains_pattern;
use super::models::TicketReportRow;
use super::pool::DbPool;
use super::schema::{klienci, maszyny, naprawy};

#[derive(Clone)]
pub struct DieselTicketReportQuery {
    pool: DbPool,
}

impl DieselTicketReportQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_report(row: TicketReportRow) -> TicketReport {
    TicketReport {
        id: TicketId::new(row.id),
        klient: row.klient,
        marka: row.marka,
        klasa: row.klasa,
        sn: row.sn,
        status: row.status,
        data_przyjecia: row.data_przyjecia,
        data_zakonczenia: row.data_zakonczenia,
        usterka: row.usterka,
        opis: row.opis,
    }
}

/// Narrow `$query` by `$clause` on `$column`. NULL never satisfies either
/// operator in SQL, which gives the null-never-matches rule for free.
macro_rules! constrain {
    ($query:expr, $column:expr, $clause:expr) => {
        match $clause.operator {
            FilterOperator::Contains => $query.filter($column.ilike(contains_pattern(&$clause.value))),
            FilterOperator::Equals => $query.filter($column.eq($clause.value.clone())),
        }
    };
}

#[async_trait]
impl TicketReportQuery for DieselTicketReportQuery {
    async fn list(
        &self,
        filter: &TicketFilter,
    ) -> Result<Vec<TicketReport>, WorkshopRepositoryError> {
        let mut conn = self.pool.get().await?;

        let mut query = naprawy::table
            .left_join(maszyny::table.left_join(klienci::table))
            .select((
                naprawy::id,
                klienci::nazwa.nullable(),
                maszyny::marka.nullable(),
                maszyny::klasa.nullable(),
                maszyny::numer_seryjny.nullable(),
                naprawy::status,
                naprawy::data_przyjecia,
                naprawy::data_zakonczenia,
                naprawy::usterka,
                naprawy::opis,
            ))
            .order(naprawy::id.desc())
            .into_boxed();

        for clause in filter.clauses() {
            query = match clause.field {
                FilterField::Client => constrain!(query, klienci::nazwa, clause),
                FilterField::Brand => constrain!(query, maszyny::marka, clause),
                FilterField::Class => constrain!(query, maszyny::klasa, clause),
                FilterField::SerialNumber => constrain!(query, maszyny::numer_seryjny, clause),
                FilterField::Status => constrain!(query, naprawy::status, clause),
                FilterField::Fault => constrain!(query, naprawy::usterka, clause),
            };
        }

        let rows: Vec<TicketReportRow> = query.load(&mut conn).await?;
        Ok(rows.into_iter().map(row_to_report).collect())
    }
}
