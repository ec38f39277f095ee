//! Machine HTTP handlers.
//!
//! ```text
//! GET  /maszyny
//! POST /maszyny {"klient_id": 1, "marka": "Bosch", "klasa": "wiertarka", "numer_seryjny": "SN-001"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, Machine, MachineDescription, MachineDraft, SerialNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tickets_dto::IdResponse;
use crate::inbound::http::validation::{FieldName, blank_field_error, require, require_text};

const CLIENT_ID: FieldName = FieldName::new("klient_id");
const SERIAL_NUMBER: FieldName = FieldName::new("numer_seryjny");

/// Body of `POST /maszyny`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ResolveMachineRequestBody {
    #[schema(example = 1)]
    pub klient_id: Option<i64>,
    #[schema(example = "Bosch")]
    pub marka: Option<String>,
    #[schema(example = "wiertarka")]
    pub klasa: Option<String>,
    #[schema(example = "SN-001")]
    pub numer_seryjny: Option<String>,
}

impl TryFrom<ResolveMachineRequestBody> for MachineDraft {
    type Error = crate::domain::Error;

    fn try_from(body: ResolveMachineRequestBody) -> Result<Self, Self::Error> {
        let client_id = ClientId::new(require(body.klient_id, CLIENT_ID)?);
        let serial = require_text(body.numer_seryjny, SERIAL_NUMBER)?;
        let serial =
            SerialNumber::new(serial).map_err(|err| blank_field_error(SERIAL_NUMBER, err))?;
        Ok(MachineDraft::new(
            client_id,
            MachineDescription::new(body.marka, body.klasa, serial),
        ))
    }
}

/// List every machine ordered by id.
#[utoipa::path(
    get,
    path = "/maszyny",
    responses(
        (status = 200, description = "Machines ordered by id", body = [Machine]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["machines"],
    operation_id = "listMachines"
)]
#[get("/maszyny")]
pub async fn list_machines(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Machine>>> {
    let machines = state.entities.list_machines().await?;
    Ok(web::Json(machines))
}

/// Return the id of the client's machine with this serial number, creating
/// the machine when it does not exist yet.
#[utoipa::path(
    post,
    path = "/maszyny",
    request_body = ResolveMachineRequestBody,
    responses(
        (status = 200, description = "Machine resolved", body = IdResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Client not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["machines"],
    operation_id = "resolveMachine"
)]
#[post("/maszyny")]
pub async fn resolve_machine(
    state: web::Data<HttpState>,
    payload: web::Json<ResolveMachineRequestBody>,
) -> ApiResult<web::Json<IdResponse>> {
    let draft = MachineDraft::try_from(payload.into_inner())?;
    let id = state.entities.resolve_machine(draft).await?;
    Ok(web::Json(IdResponse { id: id.get() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"numer_seryjny": "SN"}), "klient_id")]
    #[case(json!({"klient_id": 1}), "numer_seryjny")]
    #[case(json!({"klient_id": 1, "numer_seryjny": "  "}), "numer_seryjny")]
    fn invalid_bodies_name_the_field(#[case] body: serde_json::Value, #[case] field: &str) {
        let body: ResolveMachineRequestBody = serde_json::from_value(body).expect("decodes");
        let err = MachineDraft::try_from(body).expect_err("invalid");
        assert_eq!(
            err.details().and_then(|d| d.get("field")),
            Some(&json!(field))
        );
    }

    #[rstest]
    fn blank_brand_is_dropped() {
        let body: ResolveMachineRequestBody = serde_json::from_value(json!({
            "klient_id": 2, "marka": "", "klasa": "wiertarka", "numer_seryjny": "SN-9"
        }))
        .expect("decodes");
        let draft = MachineDraft::try_from(body).expect("valid");
        assert_eq!(draft.client_id, ClientId::new(2));
        assert_eq!(draft.description.brand(), None);
        assert_eq!(draft.description.class(), Some("wiertarka"));
    }
}
