use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Lookup by the raw username string. Callers filtering by usernames
    /// supplied in queries expect an unknown name to read as `None`, never
    /// as a validation error.
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
}
