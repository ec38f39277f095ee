//! Driving port for client and machine resolution.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientName, Error, Machine, MachineDraft, MachineId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityResolution: Send + Sync {
    async fn resolve_client(&self, name: ClientName) -> Result<ClientId, Error>;

    async fn resolve_machine(&self, draft: MachineDraft) -> Result<MachineId, Error>;

    async fn list_machines(&self) -> Result<Vec<Machine>, Error>;
}
