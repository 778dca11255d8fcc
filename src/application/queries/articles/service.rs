// src/application/queries/articles/service.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository},
        favourite::FavouriteRepository,
        follow::FollowRepository,
        user::{User, UserId, UserRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) favourite_repo: Arc<dyn FavouriteRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl ArticleQueryService {
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

    /// Attach the per-actor annotations to a page of articles: `favourited`
    /// from the actor's favourites set, `following` on each author profile.
    /// Unauthenticated requests get false everywhere.
    pub(super) async fn assemble_page(
        &self,
        actor: Option<&AuthenticatedUser>,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let favourite_ids: HashSet<ArticleId> = match actor {
            Some(actor) => self
                .favourite_repo
                .article_ids_for_user(actor.id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };
        let following_ids: HashSet<UserId> = match actor {
            Some(actor) => self
                .follow_repo
                .following_ids(actor.id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        let mut authors: HashMap<UserId, User> = HashMap::new();
        for article in &articles {
            if !authors.contains_key(&article.author_id) {
                let author = self
                    .user_repo
                    .find_by_id(article.author_id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("author not found"))?;
                authors.insert(article.author_id, author);
            }
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let author = &authors[&article.author_id];
                let favourited = favourite_ids.contains(&article.id);
                let following = following_ids.contains(&author.id);
                ArticleDto::from_parts(article, author, favourited, following)
            })
            .collect())
    }
}

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub(super) fn normalize_page(limit: Option<u32>, offset: Option<u32>) -> (u32, u32) {
    let limit = match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(limit) => limit.min(MAX_LIMIT),
    };
    (limit, offset.unwrap_or(0))
}
