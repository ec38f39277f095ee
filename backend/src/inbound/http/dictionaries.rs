//! `GET /slowniki`: distinct values for the front end's filter pickers.

use actix_web::{get, web};

use crate::domain::Facets;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Sorted, deduplicated brands, classes, faults, client names and serials.
#[utoipa::path(
    get,
    path = "/slowniki",
    responses(
        (status = 200, description = "Facet lists", body = Facets),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dictionaries"],
    operation_id = "listFacets"
)]
#[get("/slowniki")]
pub async fn list_facets(state: web::Data<HttpState>) -> ApiResult<web::Json<Facets>> {
    let facets = state.reports.facets().await?;
    Ok(web::Json(facets))
}
