use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Predicates combinable with logical AND. `tag` is a substring match
/// against the comma-joined serialization of the tag list; the id lists are
/// exact membership filters resolved by the caller.
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub tag: Option<String>,
    pub author_ids: Option<Vec<UserId>>,
    pub ids: Option<Vec<ArticleId>>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Returns the number of rows removed (0 when the id vanished meanwhile).
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Matching rows ordered by `created_at DESC, id DESC`, after skipping
    /// `offset` rows and capped at `limit`.
    async fn list(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>>;
    /// Count of rows matching the filter, ignoring pagination.
    async fn count(&self, filter: &ArticleListFilter) -> DomainResult<u64>;
}
