use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let (favourited, following) = match actor {
            Some(actor) => (
                self.favourite_repo.is_favourited(actor.id, article.id).await?,
                self.follow_repo.is_following(actor.id, author.id).await?,
            ),
            None => (false, false),
        };

        Ok(ArticleDto::from_parts(article, &author, favourited, following))
    }
}
