pub mod articles;
pub mod auth;
pub mod profiles;

pub use articles::{ArticleDeletionDto, ArticleDto, ArticlesPageDto};
pub use auth::AuthenticatedUser;
pub use profiles::ProfileDto;
