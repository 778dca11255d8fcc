pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleListFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle};
