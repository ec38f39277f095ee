//! Request and response bodies for the `/naprawy` endpoints.
//!
//! Payload keys keep the Polish column names used by the front end. Bodies
//! are decoded leniently (dates as strings, every field optional) and then
//! validated into domain values here, so handlers only see well-formed input.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ClientName, Error, FilterField, IntakeReceipt, IntakeRequest, MachineDescription, MachineId,
    NewTicket, SerialNumber, TicketDraft, TicketFilter, TicketId, TicketStatus, TicketUpdate,
};
use crate::inbound::http::validation::{
    FieldName, blank_field_error, parse_date, parse_optional_date, require, require_text,
};

const MACHINE_ID: FieldName = FieldName::new("maszyna_id");
const CLIENT: FieldName = FieldName::new("klient");
const SERIAL_NUMBER: FieldName = FieldName::new("numer_seryjny");
const DATE_RECEIVED: FieldName = FieldName::new("data_przyjecia");
const DATE_COMPLETED: FieldName = FieldName::new("data_zakonczenia");
const STATUS: FieldName = FieldName::new("status");

/// Keep "field sent as null" apart from "field not sent".
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional filters for `GET /naprawy`; blank values are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketListQuery {
    /// Client name substring, case-insensitive.
    pub klient: Option<String>,
    /// Brand substring, case-insensitive.
    pub marka: Option<String>,
    /// Class substring, case-insensitive.
    pub klasa: Option<String>,
    /// Serial number substring, case-insensitive.
    pub sn: Option<String>,
    /// Exact status.
    pub status: Option<String>,
    /// Fault description substring, case-insensitive.
    pub usterka: Option<String>,
}

impl From<TicketListQuery> for TicketFilter {
    fn from(query: TicketListQuery) -> Self {
        TicketFilter::default()
            .with(FilterField::Client, query.klient)
            .with(FilterField::Brand, query.marka)
            .with(FilterField::Class, query.klasa)
            .with(FilterField::SerialNumber, query.sn)
            .with(FilterField::Status, query.status)
            .with(FilterField::Fault, query.usterka)
    }
}

/// Body of `POST /naprawy`.
///
/// Either `maszyna_id` names an existing machine, or `klient` and
/// `numer_seryjny` (plus optional `marka`/`klasa`) describe one to resolve
/// together with its owner.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateTicketRequestBody {
    #[schema(example = 3)]
    pub maszyna_id: Option<i64>,
    #[schema(example = "Acme")]
    pub klient: Option<String>,
    #[schema(example = "Bosch")]
    pub marka: Option<String>,
    #[schema(example = "wiertarka")]
    pub klasa: Option<String>,
    #[schema(example = "SN-001")]
    pub numer_seryjny: Option<String>,
    #[schema(format = Date, example = "2024-03-01")]
    pub data_przyjecia: Option<String>,
    #[schema(format = Date)]
    pub data_zakonczenia: Option<String>,
    #[schema(example = "new")]
    pub status: Option<String>,
    #[schema(example = "leak")]
    pub usterka: Option<String>,
    pub opis: Option<String>,
}

/// Validated form of [`CreateTicketRequestBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateTicket {
    ForMachine(NewTicket),
    Intake(IntakeRequest),
}

impl CreateTicketRequestBody {
    fn describes_machine(&self) -> bool {
        self.klient.is_some() || self.numer_seryjny.is_some()
    }

    /// Validate the body into a plain create or a full intake.
    pub fn into_command(self) -> Result<CreateTicket, Error> {
        if self.maszyna_id.is_none() && self.describes_machine() {
            return self.into_intake().map(CreateTicket::Intake);
        }
        let machine_id = MachineId::new(require(self.maszyna_id, MACHINE_ID)?);
        let draft = Self::draft(
            self.data_przyjecia,
            self.data_zakonczenia,
            self.status,
            self.usterka,
            self.opis,
        )?;
        Ok(CreateTicket::ForMachine(NewTicket::new(machine_id, draft)))
    }

    fn into_intake(self) -> Result<IntakeRequest, Error> {
        let client = require_text(self.klient, CLIENT)?;
        let client = ClientName::new(client).map_err(|err| blank_field_error(CLIENT, err))?;
        let serial = require_text(self.numer_seryjny, SERIAL_NUMBER)?;
        let serial =
            SerialNumber::new(serial).map_err(|err| blank_field_error(SERIAL_NUMBER, err))?;
        let machine = MachineDescription::new(self.marka, self.klasa, serial);
        let draft = Self::draft(
            self.data_przyjecia,
            self.data_zakonczenia,
            self.status,
            self.usterka,
            self.opis,
        )?;
        Ok(IntakeRequest::new(client, machine, draft))
    }

    fn draft(
        date_received: Option<String>,
        date_completed: Option<String>,
        status: Option<String>,
        fault: Option<String>,
        notes: Option<String>,
    ) -> Result<TicketDraft, Error> {
        let date_received = require_text(date_received, DATE_RECEIVED)?;
        Ok(TicketDraft {
            date_received: parse_date(&date_received, DATE_RECEIVED)?,
            date_completed: parse_optional_date(date_completed, DATE_COMPLETED)?,
            status,
            fault,
            notes,
        })
    }
}

/// Body of `PUT /naprawy/{id}`.
///
/// Absent fields are left untouched; an explicit `null` clears
/// `data_zakonczenia`, `usterka` or `opis`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTicketRequestBody {
    #[schema(example = "done")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-09")]
    pub data_zakonczenia: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub usterka: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub opis: Option<Option<String>>,
}

impl UpdateTicketRequestBody {
    pub fn into_update(self) -> Result<TicketUpdate, Error> {
        let status = self
            .status
            .map(TicketStatus::new)
            .transpose()
            .map_err(|err| blank_field_error(STATUS, err))?;
        let date_completed = self
            .data_zakonczenia
            .map(|value| parse_optional_date(value, DATE_COMPLETED))
            .transpose()?;
        TicketUpdate::new(status, date_completed, self.usterka, self.opis).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "code": "empty_update" }))
        })
    }
}

/// Response of `POST /naprawy`.
///
/// An intake also reports the client and machine it resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketResponse {
    #[schema(example = 12)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub klient_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maszyna_id: Option<i64>,
}

impl From<TicketId> for CreateTicketResponse {
    fn from(id: TicketId) -> Self {
        Self {
            id: id.get(),
            klient_id: None,
            maszyna_id: None,
        }
    }
}

impl From<IntakeReceipt> for CreateTicketResponse {
    fn from(receipt: IntakeReceipt) -> Self {
        Self {
            id: receipt.ticket_id.get(),
            klient_id: Some(receipt.client_id.get()),
            maszyna_id: Some(receipt.machine_id.get()),
        }
    }
}

/// `{"id": n}` confirmation for resolve-or-create endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = 1)]
    pub id: i64,
}

/// `{"message": ...}` confirmation for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "ticket 12 updated")]
    pub message: String,
}
