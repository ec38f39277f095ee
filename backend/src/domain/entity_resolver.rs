//! Get-or-create resolution of clients and machines by natural key.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ClientRepository, EntityResolution, MachineRepository};
use crate::domain::{ClientId, ClientName, Error, Machine, MachineDraft, MachineId};

/// Resolves clients by name and machines by (client, serial number).
#[derive(Clone)]
pub struct EntityResolverService<C, M> {
    clients: Arc<C>,
    machines: Arc<M>,
}

impl<C, M> EntityResolverService<C, M> {
    pub fn new(clients: Arc<C>, machines: Arc<M>) -> Self {
        Self { clients, machines }
    }
}

#[async_trait]
impl<C, M> EntityResolution for EntityResolverService<C, M>
where
    C: ClientRepository,
    M: MachineRepository,
{
    async fn resolve_client(&self, name: ClientName) -> Result<ClientId, Error> {
        let resolution = self.clients.resolve(&name).await?;
        debug!(client_id = %resolution.id, created = resolution.created, "client resolved");
        Ok(resolution.id)
    }

    async fn resolve_machine(&self, draft: MachineDraft) -> Result<MachineId, Error> {
        let resolution = self.machines.resolve(&draft).await?;
        debug!(
            machine_id = %resolution.id,
            client_id = %draft.client_id,
            created = resolution.created,
            "machine resolved"
        );
        Ok(resolution.id)
    }

    async fn list_machines(&self) -> Result<Vec<Machine>, Error> {
        Ok(self.machines.list().await?)
    }
}
