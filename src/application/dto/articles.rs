use crate::domain::article::Article;
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProfileDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favourited: bool,
    pub favourites_count: i64,
    pub author: ProfileDto,
}

impl ArticleDto {
    /// Annotation flags are per requesting user and therefore supplied by
    /// the service assembling the view; unauthenticated requests pass false
    /// for both.
    pub fn from_parts(article: Article, author: &User, favourited: bool, following: bool) -> Self {
        Self {
            slug: article.slug.into(),
            title: article.title.into(),
            description: article.description.into(),
            body: article.body.into(),
            tag_list: article.tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favourited,
            favourites_count: article.favourites_count,
            author: ProfileDto::from_parts(author, following),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPageDto {
    pub articles: Vec<ArticleDto>,
    /// Matches before pagination was applied, honouring every other filter.
    pub articles_count: u64,
}

impl ArticlesPageDto {
    pub fn empty() -> Self {
        Self {
            articles: vec![],
            articles_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDeletionDto {
    pub rows_affected: u64,
}
