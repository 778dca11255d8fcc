use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Many-to-many relation between users and the articles they favourited,
/// plus the denormalized `favourites_count` on the article side.
///
/// `add` and `remove` are conditional writes: the pair insert/delete and the
/// counter adjustment happen in one transaction, and the counter only moves
/// when the pair actually changed. That keeps the counter equal to the
/// relation's cardinality and never negative, even under concurrent toggles.
#[async_trait]
pub trait FavouriteRepository: Send + Sync {
    /// Returns whether the pair was newly inserted.
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;

    /// Returns whether the pair existed and was removed.
    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;

    async fn is_favourited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;

    /// Ids of every article the user has favourited.
    async fn article_ids_for_user(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>>;
}
