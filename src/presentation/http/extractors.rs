// src/presentation/http/extractors.rs
use crate::application::dto::AuthenticatedUser;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, RequestPartsExt,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Routes that require a caller. Missing or invalid credentials are a 401.
pub struct Authenticated(pub AuthenticatedUser);

/// Routes that adapt to a caller when one is present. A missing header
/// yields `None`; credentials that are present but invalid still fail.
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Token ")
        .or_else(|| value.strip_prefix("Bearer "))
}

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(state) = parts
        .extract::<Extension<HttpState>>()
        .await
        .map_err(|_| HttpError::unauthorized("service state unavailable"))?;
    Ok(state)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts).map(str::to_owned) else {
            return Err(HttpError::unauthorized("missing authorization header"));
        };
        let state = state_from(parts).await?;
        let user = state
            .services
            .authenticator()
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts).map(str::to_owned) else {
            return Ok(Self(None));
        };
        let state = state_from(parts).await?;
        let user = state
            .services
            .authenticator()
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(Some(user)))
    }
}
