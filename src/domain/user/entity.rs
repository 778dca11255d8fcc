// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, UserId, Username};
use chrono::{DateTime, Utc};

/// Account record. Registration and credential handling live with the
/// external identity service; this backend only reads users and maintains
/// their favourites and follow relations.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}
