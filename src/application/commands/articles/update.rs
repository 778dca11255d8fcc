use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, ArticleUpdate,
        specifications::{ArticleSpecification, IsArticleAuthorSpec},
    },
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// Merges the provided fields over the stored article. The slug is never
    /// recomputed, even when the title changes.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let mut article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !IsArticleAuthorSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can update this article",
            ));
        }

        let title = command.title.map(ArticleTitle::new).transpose()?;
        let description = command
            .description
            .map(ArticleDescription::new)
            .transpose()?;
        let body = command.body.map(ArticleBody::new).transpose()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(article.id, article.updated_at);
        if let Some(title) = &title {
            update = update.with_title(title.clone());
        }
        if let Some(description) = &description {
            update = update.with_description(description.clone());
        }
        if let Some(body) = &body {
            update = update.with_body(body.clone());
        }
        article.merge_content(title, description, body, now);
        update.set_updated_at(article.updated_at);

        let updated = self.write_repo.update(update).await?;

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let favourited = self.favourite_repo.is_favourited(actor.id, updated.id).await?;

        Ok(ArticleDto::from_parts(updated, &author, favourited, false))
    }
}
