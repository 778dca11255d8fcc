// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::{
        articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        favourites::{FavouriteArticleCommand, UnfavouriteArticleCommand},
    },
    dto::{ArticleDeletionDto, ArticleDto, ArticlesPageDto},
    queries::articles::{FeedArticlesQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub favourited: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub article: CreateArticleBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleBody {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub article: UpdateArticleBody,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlesPageDto>> {
    state
        .services
        .article_queries
        .list_articles(
            actor.0.as_ref(),
            ListArticlesQuery {
                tag: params.tag,
                author: params.author,
                favourited: params.favourited,
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn feed_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticlesPageDto>> {
    state
        .services
        .article_queries
        .feed_articles(
            &actor,
            FeedArticlesQuery {
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = CreateArticleCommand {
        title: payload.article.title,
        description: payload.article.description,
        body: payload.article.body,
        tag_list: payload.article.tag_list,
    };

    let article = state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        slug,
        title: payload.article.title,
        description: payload.article.description,
        body: payload.article.body,
    };

    let article = state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDeletionDto>> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn favourite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .favourite_commands
        .favourite_article(&actor, FavouriteArticleCommand { slug })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn unfavourite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .favourite_commands
        .unfavourite_article(&actor, UnfavouriteArticleCommand { slug })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}
