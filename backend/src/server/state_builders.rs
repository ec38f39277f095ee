//! Wiring of the workshop services onto a concrete store.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use workshop::domain::ports::{
    ClientRepository, FacetsQuery, MachineRepository, TicketReportQuery, TicketRepository,
};
use workshop::domain::{EntityResolverService, ReportingService, TicketService};
use workshop::inbound::http::state::HttpState;
use workshop::outbound::memory::MemoryStore;
use workshop::outbound::persistence::{
    DieselClientRepository, DieselFacetsQuery, DieselMachineRepository, DieselTicketReportQuery,
    DieselTicketRepository,
};

use super::ServerConfig;

/// The five driven ports a workshop deployment needs.
struct Store<C, M, T, R, F> {
    clients: Arc<C>,
    machines: Arc<M>,
    tickets: Arc<T>,
    reports: Arc<R>,
    facets: Arc<F>,
}

impl<C, M, T, R, F> Store<C, M, T, R, F>
where
    C: ClientRepository + 'static,
    M: MachineRepository + 'static,
    T: TicketRepository + 'static,
    R: TicketReportQuery + 'static,
    F: FacetsQuery + 'static,
{
    fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(EntityResolverService::new(self.clients, self.machines)),
            Arc::new(TicketService::new(self.tickets)),
            Arc::new(ReportingService::new(self.reports, self.facets)),
        )
    }
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => Store {
            clients: Arc::new(DieselClientRepository::new(pool.clone())),
            machines: Arc::new(DieselMachineRepository::new(pool.clone())),
            tickets: Arc::new(DieselTicketRepository::new(pool.clone())),
            reports: Arc::new(DieselTicketReportQuery::new(pool.clone())),
            facets: Arc::new(DieselFacetsQuery::new(pool.clone())),
        }
        .into_state(),
        None => {
            warn!("no database configured; data is kept in memory and lost on restart");
            let store = Arc::new(MemoryStore::new());
            Store {
                clients: store.clone(),
                machines: store.clone(),
                tickets: store.clone(),
                reports: store.clone(),
                facets: store,
            }
            .into_state()
        }
    };
    web::Data::new(state)
}
