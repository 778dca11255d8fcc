use super::ProfileQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};

pub struct GetProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    pub async fn get_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetProfileQuery,
    ) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_username(&query.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let following = match actor {
            Some(actor) => self.follow_repo.is_following(actor.id, user.id).await?,
            None => false,
        };

        Ok(ProfileDto::from_parts(&user, following))
    }
}
