use super::ArticleQueryService;
use super::service::normalize_page;
use crate::{
    application::{
        dto::{ArticlesPageDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleListFilter,
};

pub struct FeedArticlesQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleQueryService {
    /// Articles by authors the actor follows, with the same ordering, count
    /// and annotation semantics as the listing engine.
    pub async fn feed_articles(
        &self,
        actor: &AuthenticatedUser,
        query: FeedArticlesQuery,
    ) -> ApplicationResult<ArticlesPageDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);

        let following = self.follow_repo.following_ids(actor.id).await?;
        if following.is_empty() {
            return Ok(ArticlesPageDto::empty());
        }

        let filter = ArticleListFilter {
            author_ids: Some(following),
            ..ArticleListFilter::default()
        };

        let articles_count = self.read_repo.count(&filter).await?;
        let articles = self.read_repo.list(&filter, limit, offset).await?;
        let articles = self.assemble_page(Some(actor), articles).await?;

        Ok(ArticlesPageDto {
            articles,
            articles_count,
        })
    }
}
