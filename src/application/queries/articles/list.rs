use super::ArticleQueryService;
use super::service::normalize_page;
use crate::{
    application::{
        dto::{ArticlesPageDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleListFilter,
};

pub struct ListArticlesQuery {
    /// Substring match against the tag list serialization.
    pub tag: Option<String>,
    /// Exact username of the author.
    pub author: Option<String>,
    /// Exact username of a user whose favourites the result is limited to.
    pub favourited: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleQueryService {
    /// The listing engine: filter, count, paginate, annotate. Ordering is
    /// always newest-first. A username filter that resolves to nothing (an
    /// unknown author, or a favouriter with an empty favourites set) forces
    /// an empty page instead of erroring; the reported count then honours
    /// the same filters and reads zero.
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticlesPageDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);

        let mut filter = ArticleListFilter {
            tag: query.tag,
            ..ArticleListFilter::default()
        };

        if let Some(username) = query.author.as_deref() {
            match self.user_repo.find_by_username(username).await? {
                Some(author) => filter.author_ids = Some(vec![author.id]),
                None => return Ok(ArticlesPageDto::empty()),
            }
        }

        if let Some(username) = query.favourited.as_deref() {
            let Some(user) = self.user_repo.find_by_username(username).await? else {
                return Ok(ArticlesPageDto::empty());
            };
            let ids = self.favourite_repo.article_ids_for_user(user.id).await?;
            if ids.is_empty() {
                return Ok(ArticlesPageDto::empty());
            }
            filter.ids = Some(ids);
        }

        let articles_count = self.read_repo.count(&filter).await?;
        let articles = self.read_repo.list(&filter, limit, offset).await?;
        let articles = self.assemble_page(actor, articles).await?;

        Ok(ArticlesPageDto {
            articles,
            articles_count,
        })
    }
}
