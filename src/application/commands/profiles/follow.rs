use super::ProfileCommandService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::ApplicationResult,
};

pub struct FollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    pub async fn follow_user(
        &self,
        actor: &AuthenticatedUser,
        command: FollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.resolve_target(actor, &command.username).await?;
        self.follow_repo.follow(actor.id, target.id).await?;
        Ok(ProfileDto::from_parts(&target, true))
    }
}
