//! Get-or-create steps that run on a connection the caller already holds.
//!
//! Callers wrap these in a transaction so the lookup and the insert see the
//! same snapshot; the intake chains all three in one transaction.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{Resolution, WorkshopRepositoryError};
use crate::domain::{ClientId, ClientName, MachineDraft, MachineId, TicketDetails, TicketId};

use super::models::{NewClientRow, NewMachineRow, NewTicketRow};
use super::schema::{klienci, maszyny, naprawy};

pub(crate) async fn resolve_client_in(
    conn: &mut AsyncPgConnection,
    name: &ClientName,
) -> Result<Resolution<ClientId>, WorkshopRepositoryError> {
    let existing = klienci::table
        .filter(klienci::nazwa.eq(name.as_ref()))
        .order(klienci::id.asc())
        .select(klienci::id)
        .first::<i64>(conn)
        .await
        .optional()?;
    if let Some(id) = existing {
        return Ok(Resolution::existing(ClientId::new(id)));
    }

    let id = diesel::insert_into(klienci::table)
        .values(NewClientRow {
            nazwa: name.as_ref(),
        })
        .returning(klienci::id)
        .get_result::<i64>(conn)
        .await?;
    Ok(Resolution::created(ClientId::new(id)))
}

pub(crate) async fn resolve_machine_in(
    conn: &mut AsyncPgConnection,
    draft: &MachineDraft,
) -> Result<Resolution<MachineId>, WorkshopRepositoryError> {
    let client_id = draft.client_id.get();
    let serial = draft.description.serial_number().as_ref();

    let existing = maszyny::table
        .filter(maszyny::klient_id.eq(client_id))
        .filter(maszyny::numer_seryjny.eq(serial))
        .order(maszyny::id.asc())
        .select(maszyny::id)
        .first::<i64>(conn)
        .await
        .optional()?;
    if let Some(id) = existing {
        return Ok(Resolution::existing(MachineId::new(id)));
    }

    let owner_exists = diesel::select(diesel::dsl::exists(klienci::table.find(client_id)))
        .get_result::<bool>(conn)
        .await?;
    if !owner_exists {
        return Err(WorkshopRepositoryError::missing_client(client_id));
    }

    let id = diesel::insert_into(maszyny::table)
        .values(NewMachineRow {
            klient_id: client_id,
            marka: draft.description.brand(),
            klasa: draft.description.class(),
            numer_seryjny: serial,
        })
        .returning(maszyny::id)
        .get_result::<i64>(conn)
        .await?;
    Ok(Resolution::created(MachineId::new(id)))
}

pub(crate) async fn insert_ticket_in(
    conn: &mut AsyncPgConnection,
    machine_id: MachineId,
    details: &TicketDetails,
) -> Result<TicketId, WorkshopRepositoryError> {
    let machine_exists =
        diesel::select(diesel::dsl::exists(maszyny::table.find(machine_id.get())))
            .get_result::<bool>(conn)
            .await?;
    if !machine_exists {
        return Err(WorkshopRepositoryError::missing_machine(machine_id.get()));
    }

    let id = diesel::insert_into(naprawy::table)
        .values(NewTicketRow {
            maszyna_id: machine_id.get(),
            data_przyjecia: details.date_received(),
            data_zakonczenia: details.date_completed(),
            status: details.status().as_ref(),
            usterka: details.fault(),
            opis: details.notes(),
        })
        .returning(naprawy::id)
        .get_result::<i64>(conn)
        .await?;
    Ok(TicketId::new(id))
}
