// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDeletionDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleSlug,
        specifications::{ArticleSpecification, IsArticleAuthorSpec},
    },
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDeletionDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !IsArticleAuthorSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can delete this article",
            ));
        }

        let rows_affected = self.write_repo.delete(article.id).await?;
        Ok(ArticleDeletionDto { rows_affected })
    }
}
