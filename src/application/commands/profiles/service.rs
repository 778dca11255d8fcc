// src/application/commands/profiles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        follow::FollowRepository,
        user::{User, UserRepository},
    },
};

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl ProfileCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    /// Resolve the target of a follow mutation, rejecting self-follows
    /// before anything is written.
    pub(super) async fn resolve_target(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<User> {
        let target = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        if target.id == actor.id {
            return Err(ApplicationError::validation(
                "follower and following cannot be equal",
            ));
        }

        Ok(target)
    }
}
