//! OpenAPI documentation for the workshop REST API.
//!
//! [`ApiDoc`] registers every handler in the HTTP inbound layer plus the
//! error payload wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds and `openapi-dump` writes it out for tooling.

use utoipa::OpenApi;

use crate::domain::{Facets, Machine, TicketReport};
use crate::inbound::http::clients::ResolveClientRequestBody;
use crate::inbound::http::health::IndexResponse;
use crate::inbound::http::machines::ResolveMachineRequestBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tickets_dto::{
    CreateTicketRequestBody, CreateTicketResponse, IdResponse, MessageResponse,
    UpdateTicketRequestBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workshop repair service API",
        description = "Repair tickets, machines and clients of a service workshop."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tickets::list_tickets,
        crate::inbound::http::tickets::create_ticket,
        crate::inbound::http::tickets::update_ticket,
        crate::inbound::http::tickets::delete_ticket,
        crate::inbound::http::machines::list_machines,
        crate::inbound::http::machines::resolve_machine,
        crate::inbound::http::clients::resolve_client,
        crate::inbound::http::dictionaries::list_facets,
        crate::inbound::http::health::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TicketReport,
        Machine,
        Facets,
        CreateTicketRequestBody,
        CreateTicketResponse,
        UpdateTicketRequestBody,
        ResolveMachineRequestBody,
        ResolveClientRequestBody,
        IdResponse,
        MessageResponse,
        IndexResponse,
    )),
    tags(
        (name = "tickets", description = "Repair tickets and the joined report"),
        (name = "machines", description = "Machines owned by clients"),
        (name = "clients", description = "Workshop clients"),
        (name = "dictionaries", description = "Distinct values for filter pickers"),
        (name = "health", description = "Service index and probes")
    )
)]
pub struct ApiDoc;
