//! Driven port for client get-or-create.

use async_trait::async_trait;

use crate::domain::{ClientId, ClientName};

use super::{Resolution, WorkshopRepositoryError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Return the oldest client with exactly this name, inserting one when
    /// none exists.
    async fn resolve(&self, name: &ClientName)
    -> Result<Resolution<ClientId>, WorkshopRepositoryError>;
}
