// src/application/commands/favourites/remove.rs
use super::FavouriteCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct UnfavouriteArticleCommand {
    pub slug: String,
}

impl FavouriteCommandService {
    /// No-op when the actor never favourited the article; the counter only
    /// decrements on a confirmed removal, so it cannot go negative.
    pub async fn unfavourite_article(
        &self,
        actor: &AuthenticatedUser,
        command: UnfavouriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.favourite_repo.remove(actor.id, article.id).await?;

        self.assemble(actor, article, false).await
    }
}
