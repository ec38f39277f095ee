//! HTTP inbound adapter exposing the workshop REST endpoints.

use actix_web::web;

pub mod clients;
pub mod dictionaries;
pub mod error;
pub mod health;
pub mod machines;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tickets;
pub mod tickets_dto;
pub mod validation;

pub use error::ApiResult;

/// Register the workshop endpoints and the structured extractor errors.
///
/// Health probes are registered separately because they depend on
/// [`health::HealthState`] rather than [`state::HttpState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    error::configure_extractors(cfg);
    cfg.service(tickets::list_tickets)
        .service(tickets::create_ticket)
        .service(tickets::update_ticket)
        .service(tickets::delete_ticket)
        .service(machines::list_machines)
        .service(machines::resolve_machine)
        .service(clients::resolve_client)
        .service(dictionaries::list_facets);
}
