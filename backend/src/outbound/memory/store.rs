//! Mutex-guarded tables mirroring `klienci`, `maszyny` and `naprawy`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ClientRepository, FacetsQuery, MachineRepository, Resolution, TicketReportQuery,
    TicketRepository, WorkshopRepositoryError,
};
use crate::domain::{
    Client, ClientId, ClientName, FacetSource, IntakeReceipt, IntakeRequest, Machine,
    MachineDraft, MachineId, NewTicket, Ticket, TicketDetails, TicketFilter, TicketId,
    TicketReport, TicketUpdate,
};

#[derive(Debug, Clone, Default)]
struct State {
    clients: BTreeMap<ClientId, Client>,
    machines: BTreeMap<MachineId, Machine>,
    tickets: BTreeMap<TicketId, Ticket>,
    last_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn resolve_client(&mut self, name: &ClientName) -> Resolution<ClientId> {
        if let Some(client) = self.clients.values().find(|client| &client.name == name) {
            return Resolution::existing(client.id);
        }
        let id = ClientId::new(self.next_id());
        self.clients.insert(
            id,
            Client {
                id,
                name: name.clone(),
            },
        );
        Resolution::created(id)
    }

    fn resolve_machine(
        &mut self,
        draft: &MachineDraft,
    ) -> Result<Resolution<MachineId>, WorkshopRepositoryError> {
        let serial = draft.description.serial_number().as_ref();
        if let Some(machine) = self
            .machines
            .values()
            .find(|m| m.client_id == draft.client_id && m.serial_number == serial)
        {
            return Ok(Resolution::existing(machine.id));
        }
        if !self.clients.contains_key(&draft.client_id) {
            return Err(WorkshopRepositoryError::missing_client(draft.client_id.get()));
        }
        let id = MachineId::new(self.next_id());
        self.machines.insert(id, Machine::from_draft(id, draft));
        Ok(Resolution::created(id))
    }

    fn insert_ticket(
        &mut self,
        machine_id: MachineId,
        details: &TicketDetails,
    ) -> Result<TicketId, WorkshopRepositoryError> {
        if !self.machines.contains_key(&machine_id) {
            return Err(WorkshopRepositoryError::missing_machine(machine_id.get()));
        }
        let id = TicketId::new(self.next_id());
        self.tickets.insert(
            id,
            Ticket {
                id,
                machine_id,
                details: details.clone(),
            },
        );
        Ok(id)
    }

    fn report_row(&self, ticket: &Ticket) -> TicketReport {
        let machine = self.machines.get(&ticket.machine_id);
        let client = machine.and_then(|m| self.clients.get(&m.client_id));
        let details = &ticket.details;
        TicketReport {
            id: ticket.id,
            klient: client.map(|c| c.name.to_string()),
            marka: machine.and_then(|m| m.brand.clone()),
            klasa: machine.and_then(|m| m.class.clone()),
            sn: machine.map(|m| m.serial_number.clone()),
            status: details.status().as_ref().to_owned(),
            data_przyjecia: details.date_received(),
            data_zakonczenia: details.date_completed(),
            usterka: details.fault().map(str::to_owned),
            opis: details.notes().map(str::to_owned),
        }
    }
}

/// Cloneable handle; clones share the same tables.
///
/// Ids come from one sequence shared by all three tables, so they are unique
/// across the store and grow monotonically.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Point an existing ticket at another machine id, which need not exist.
    /// Lets tests reproduce rows left behind by deleted machines.
    #[cfg(test)]
    pub(crate) fn reassign_machine(&self, ticket: TicketId, machine: MachineId) {
        if let Some(row) = self.state().tickets.get_mut(&ticket) {
            row.machine_id = machine;
        }
    }
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn resolve(
        &self,
        name: &ClientName,
    ) -> Result<Resolution<ClientId>, WorkshopRepositoryError> {
        Ok(self.state().resolve_client(name))
    }
}

#[async_trait]
impl MachineRepository for MemoryStore {
    async fn resolve(
        &self,
        draft: &MachineDraft,
    ) -> Result<Resolution<MachineId>, WorkshopRepositoryError> {
        self.state().resolve_machine(draft)
    }

    async fn list(&self) -> Result<Vec<Machine>, WorkshopRepositoryError> {
        Ok(self.state().machines.values().cloned().collect())
    }
}

#[async_trait]
impl TicketRepository for MemoryStore {
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, WorkshopRepositoryError> {
        self.state().insert_ticket(ticket.machine_id, &ticket.details)
    }

    async fn intake(
        &self,
        request: &IntakeRequest,
    ) -> Result<IntakeReceipt, WorkshopRepositoryError> {
        let mut guard = self.state();
        let mut draft_state = (*guard).clone();

        let client = draft_state.resolve_client(&request.client);
        let machine = draft_state
            .resolve_machine(&MachineDraft::new(client.id, request.machine.clone()))?;
        let ticket_id = draft_state.insert_ticket(machine.id, &request.details)?;

        *guard = draft_state;
        Ok(IntakeReceipt {
            client_id: client.id,
            machine_id: machine.id,
            ticket_id,
        })
    }

    async fn update(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> Result<bool, WorkshopRepositoryError> {
        let mut state = self.state();
        let Some(ticket) = state.tickets.get_mut(&id) else {
            return Ok(false);
        };
        ticket.apply(update);
        Ok(true)
    }

    async fn delete(&self, id: TicketId) -> Result<bool, WorkshopRepositoryError> {
        Ok(self.state().tickets.remove(&id).is_some())
    }
}

#[async_trait]
impl TicketReportQuery for MemoryStore {
    async fn list(
        &self,
        filter: &TicketFilter,
    ) -> Result<Vec<TicketReport>, WorkshopRepositoryError> {
        let state = self.state();
        Ok(state
            .tickets
            .values()
            .rev()
            .map(|ticket| state.report_row(ticket))
            .filter(|row| filter.matches(row))
            .collect())
    }
}

#[async_trait]
impl FacetsQuery for MemoryStore {
    async fn load(&self) -> Result<FacetSource, WorkshopRepositoryError> {
        let state = self.state();
        let machines = || state.machines.values();
        Ok(FacetSource {
            brands: machines().map(|m| m.brand.clone()).collect(),
            classes: machines().map(|m| m.class.clone()).collect(),
            faults: state
                .tickets
                .values()
                .map(|t| t.details.fault().map(str::to_owned))
                .collect(),
            client_names: state
                .clients
                .values()
                .map(|c| Some(c.name.to_string()))
                .collect(),
            serial_numbers: machines().map(|m| Some(m.serial_number.clone())).collect(),
        })
    }
}
