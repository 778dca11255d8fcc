use super::ProfileCommandService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::ApplicationResult,
};

pub struct UnfollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    pub async fn unfollow_user(
        &self,
        actor: &AuthenticatedUser,
        command: UnfollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.resolve_target(actor, &command.username).await?;
        self.follow_repo.unfollow(actor.id, target.id).await?;
        Ok(ProfileDto::from_parts(&target, false))
    }
}
