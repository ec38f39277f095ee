//! Diesel row structs. Internal to the persistence adapters.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{klienci, maszyny, naprawy};

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = klienci)]
pub(crate) struct NewClientRow<'a> {
    pub nazwa: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maszyny)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MachineRow {
    pub id: i64,
    pub klient_id: i64,
    pub marka: Option<String>,
    pub klasa: Option<String>,
    pub numer_seryjny: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maszyny)]
pub(crate) struct NewMachineRow<'a> {
    pub klient_id: i64,
    pub marka: Option<&'a str>,
    pub klasa: Option<&'a str>,
    pub numer_seryjny: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = naprawy)]
pub(crate) struct NewTicketRow<'a> {
    pub maszyna_id: i64,
    pub data_przyjecia: NaiveDate,
    pub data_zakonczenia: Option<NaiveDate>,
    pub status: &'a str,
    pub usterka: Option<&'a str>,
    pub opis: Option<&'a str>,
}

/// Partial update; `None` leaves a column alone, `Some(None)` writes NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = naprawy)]
pub(crate) struct TicketChangeset<'a> {
    pub status: Option<&'a str>,
    pub data_zakonczenia: Option<Option<NaiveDate>>,
    pub usterka: Option<Option<&'a str>>,
    pub opis: Option<Option<&'a str>>,
}

/// One row of the ticket/machine/client left join.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct TicketReportRow {
    pub id: i64,
    pub klient: Option<String>,
    pub marka: Option<String>,
    pub klasa: Option<String>,
    pub sn: Option<String>,
    pub status: String,
    pub data_przyjecia: NaiveDate,
    pub data_zakonczenia: Option<NaiveDate>,
    pub usterka: Option<String>,
    pub opis: Option<String>,
}
