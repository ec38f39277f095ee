//! Client HTTP handler.
//!
//! ```text
//! POST /klienci {"nazwa": "Acme"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ClientName;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tickets_dto::IdResponse;
use crate::inbound::http::validation::{FieldName, blank_field_error, require_text};

const NAME: FieldName = FieldName::new("nazwa");

/// Body of `POST /klienci`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ResolveClientRequestBody {
    #[schema(example = "Acme")]
    pub nazwa: Option<String>,
}

/// Return the id of the client with this exact name, creating it if needed.
#[utoipa::path(
    post,
    path = "/klienci",
    request_body = ResolveClientRequestBody,
    responses(
        (status = 200, description = "Client resolved", body = IdResponse),
        (status = 400, description = "Missing or blank name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "resolveClient"
)]
#[post("/klienci")]
pub async fn resolve_client(
    state: web::Data<HttpState>,
    payload: web::Json<ResolveClientRequestBody>,
) -> ApiResult<web::Json<IdResponse>> {
    let name = require_text(payload.into_inner().nazwa, NAME)?;
    let name = ClientName::new(name).map_err(|err| blank_field_error(NAME, err))?;
    let id = state.entities.resolve_client(name).await?;
    Ok(web::Json(IdResponse { id: id.get() }))
}
