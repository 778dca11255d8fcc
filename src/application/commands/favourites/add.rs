// src/application/commands/favourites/add.rs
use super::FavouriteCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct FavouriteArticleCommand {
    pub slug: String,
}

impl FavouriteCommandService {
    /// Idempotent: favouriting an article twice leaves both the relation and
    /// the counter exactly where the first call put them.
    pub async fn favourite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavouriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.favourite_repo.add(actor.id, article.id).await?;

        self.assemble(actor, article, true).await
    }
}
