//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EntityResolution, ReportQuery, TicketCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub entities: Arc<dyn EntityResolution>,
    pub tickets: Arc<dyn TicketCommand>,
    pub reports: Arc<dyn ReportQuery>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use workshop::domain::{EntityResolverService, ReportingService, TicketService};
    /// use workshop::inbound::http::state::HttpState;
    /// use workshop::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::default());
    /// let state = HttpState::new(
    ///     Arc::new(EntityResolverService::new(store.clone(), store.clone())),
    ///     Arc::new(TicketService::new(store.clone())),
    ///     Arc::new(ReportingService::new(store.clone(), store)),
    /// );
    /// let _reports = state.reports.clone();
    /// ```
    pub fn new(
        entities: Arc<dyn EntityResolution>,
        tickets: Arc<dyn TicketCommand>,
        reports: Arc<dyn ReportQuery>,
    ) -> Self {
        Self {
            entities,
            tickets,
            reports,
        }
    }
}
