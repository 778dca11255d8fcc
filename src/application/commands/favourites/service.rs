// src/application/commands/favourites/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleReadRepository},
        favourite::FavouriteRepository,
        follow::FollowRepository,
        user::UserRepository,
    },
};

pub struct FavouriteCommandService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) favourite_repo: Arc<dyn FavouriteRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl FavouriteCommandService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        favourite_repo: Arc<dyn FavouriteRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            favourite_repo,
            follow_repo,
        }
    }

    /// Re-read the article after a toggle so the returned counter reflects
    /// the committed state, then attach the per-actor annotations.
    pub(super) async fn assemble(
        &self,
        actor: &AuthenticatedUser,
        article: Article,
        favourited: bool,
    ) -> ApplicationResult<ArticleDto> {
        let refreshed = self
            .read_repo
            .find_by_id(article.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let author = self
            .user_repo
            .find_by_id(refreshed.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let following = self.follow_repo.is_following(actor.id, author.id).await?;

        Ok(ArticleDto::from_parts(refreshed, &author, favourited, following))
    }
}
