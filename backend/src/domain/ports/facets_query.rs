//! Driven port for the raw facet columns.

use async_trait::async_trait;

use crate::domain::FacetSource;

use super::WorkshopRepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FacetsQuery: Send + Sync {
    /// Column values feeding the facet lists. Adapters may pre-deduplicate;
    /// the domain normalises the result either way.
    async fn load(&self) -> Result<FacetSource, WorkshopRepositoryError>;
}
