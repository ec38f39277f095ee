//! Driven port for machine get-or-create and listing.

use async_trait::async_trait;

use crate::domain::{Machine, MachineDraft, MachineId};

use super::{Resolution, WorkshopRepositoryError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MachineRepository: Send + Sync {
    /// Look the machine up by (client, serial number) and insert it when
    /// missing. Brand and class of an existing row are left as they are.
    ///
    /// Fails with [`WorkshopRepositoryError::MissingClient`] when the owner
    /// does not exist.
    async fn resolve(
        &self,
        draft: &MachineDraft,
    ) -> Result<Resolution<MachineId>, WorkshopRepositoryError>;

    /// Every machine, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Machine>, WorkshopRepositoryError>;
}
