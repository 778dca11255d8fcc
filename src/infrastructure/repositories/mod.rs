// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_favourite;
mod postgres_follow;
mod postgres_tag;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_favourite::PostgresFavouriteRepository;
pub use postgres_follow::PostgresFollowRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
