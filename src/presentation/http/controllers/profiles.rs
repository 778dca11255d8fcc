// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::{FollowUserCommand, UnfollowUserCommand},
    dto::ProfileDto,
    queries::profiles::GetProfileQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_queries
        .get_profile(actor.0.as_ref(), GetProfileQuery { username })
        .await
        .into_http()?;
    Ok(Json(ProfileResponse { profile }))
}

pub async fn follow_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .follow_user(&actor, FollowUserCommand { username })
        .await
        .into_http()?;
    Ok(Json(ProfileResponse { profile }))
}

pub async fn unfollow_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .unfollow_user(&actor, UnfollowUserCommand { username })
        .await
        .into_http()?;
    Ok(Json(ProfileResponse { profile }))
}
