//! Driven port for the flat ticket report.

use async_trait::async_trait;

use crate::domain::{TicketFilter, TicketReport};

use super::WorkshopRepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketReportQuery: Send + Sync {
    /// Tickets joined left-outer to machine and client, filtered by every
    /// clause of `filter` and ordered by ticket id descending.
    async fn list(&self, filter: &TicketFilter)
    -> Result<Vec<TicketReport>, WorkshopRepositoryError>;
}
