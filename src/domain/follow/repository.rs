use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Directed follow edges between users, keyed by the
/// (follower_id, following_id) pair. Both mutations are idempotent
/// conditional writes on the pair key.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Returns whether the edge was newly inserted.
    async fn follow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool>;

    /// Returns whether the edge existed and was removed.
    async fn unfollow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool>;

    async fn is_following(&self, follower_id: UserId, following_id: UserId)
    -> DomainResult<bool>;

    /// Ids of every user the follower follows.
    async fn following_ids(&self, follower_id: UserId) -> DomainResult<Vec<UserId>>;
}
