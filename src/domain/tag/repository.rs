use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Tag vocabulary, ordered by name.
    async fn list(&self) -> DomainResult<Vec<String>>;
}
