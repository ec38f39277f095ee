//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::{EntityResolverService, ReportingService, TicketService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;

/// Wire the real services over a fresh in-memory store.
pub fn memory_state(store: &MemoryStore) -> web::Data<HttpState> {
    let store = Arc::new(store.clone());
    web::Data::new(HttpState::new(
        Arc::new(EntityResolverService::new(store.clone(), store.clone())),
        Arc::new(TicketService::new(store.clone())),
        Arc::new(ReportingService::new(store.clone(), store)),
    ))
}

/// Initialise an app serving every workshop endpoint over `state`.
pub async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(App::new().app_data(state).configure(super::configure)).await
}
