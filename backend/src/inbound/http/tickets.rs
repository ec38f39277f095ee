//! Repair ticket HTTP handlers.
//!
//! ```text
//! GET    /naprawy?klient=&marka=&klasa=&sn=&status=&usterka=
//! POST   /naprawy
//! PUT    /naprawy/{id}
//! DELETE /naprawy/{id}
//! ```

use actix_web::{delete, get, post, put, web};

use crate::domain::{TicketId, TicketReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tickets_dto::{
    CreateTicket, CreateTicketRequestBody, CreateTicketResponse, MessageResponse,
    TicketListQuery, UpdateTicketRequestBody,
};

/// List tickets joined with their machine and client, newest first.
#[utoipa::path(
    get,
    path = "/naprawy",
    params(TicketListQuery),
    responses(
        (status = 200, description = "Tickets ordered by id descending", body = [TicketReport]),
        (status = 400, description = "Malformed query string", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "listTickets"
)]
#[get("/naprawy")]
pub async fn list_tickets(
    state: web::Data<HttpState>,
    query: web::Query<TicketListQuery>,
) -> ApiResult<web::Json<Vec<TicketReport>>> {
    let rows = state.reports.list_tickets(query.into_inner().into()).await?;
    Ok(web::Json(rows))
}

/// Create a ticket for a known machine, or take in a client, machine and
/// ticket in one step.
#[utoipa::path(
    post,
    path = "/naprawy",
    request_body = CreateTicketRequestBody,
    responses(
        (status = 200, description = "Ticket created", body = CreateTicketResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Machine not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/naprawy")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTicketRequestBody>,
) -> ApiResult<web::Json<CreateTicketResponse>> {
    let response = match payload.into_inner().into_command()? {
        CreateTicket::ForMachine(ticket) => state.tickets.create(ticket).await?.into(),
        CreateTicket::Intake(request) => state.tickets.intake(request).await?.into(),
    };
    Ok(web::Json(response))
}

/// Partially update a ticket.
#[utoipa::path(
    put,
    path = "/naprawy/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    request_body = UpdateTicketRequestBody,
    responses(
        (status = 200, description = "Ticket updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Ticket not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "updateTicket"
)]
#[put("/naprawy/{id}")]
pub async fn update_ticket(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTicketRequestBody>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = TicketId::new(path.into_inner());
    let update = payload.into_inner().into_update()?;
    state.tickets.update(id, update).await?;
    Ok(web::Json(MessageResponse {
        message: format!("ticket {id} updated"),
    }))
}

/// Delete a ticket.
#[utoipa::path(
    delete,
    path = "/naprawy/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Ticket not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "deleteTicket"
)]
#[delete("/naprawy/{id}")]
pub async fn delete_ticket(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = TicketId::new(path.into_inner());
    state.tickets.delete(id).await?;
    Ok(web::Json(MessageResponse {
        message: format!("ticket {id} deleted"),
    }))
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
