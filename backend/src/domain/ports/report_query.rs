//! Driving port for read-side views.

use async_trait::async_trait;

use crate::domain::{Error, Facets, TicketFilter, TicketReport};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportQuery: Send + Sync {
    async fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<TicketReport>, Error>;

    async fn facets(&self) -> Result<Facets, Error>;
}
