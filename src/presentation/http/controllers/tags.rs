// src/presentation/http/controllers/tags.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

pub async fn list_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TagsResponse>> {
    let tags = state.services.tag_queries.list_tags().await.into_http()?;
    Ok(Json(TagsResponse { tags }))
}
