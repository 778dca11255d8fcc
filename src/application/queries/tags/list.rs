use super::TagQueryService;
use crate::application::error::ApplicationResult;

impl TagQueryService {
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.tag_repo.list().await?)
    }
}
