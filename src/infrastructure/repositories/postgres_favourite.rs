// src/infrastructure/repositories/postgres_favourite.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::favourite::FavouriteRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

/// The join-table side of favourites. The pair mutation and the counter
/// adjustment on `articles.favourites_count` commit in one transaction, and
/// the counter only moves when the pair actually changed, so concurrent
/// toggles cannot drift the counter away from the relation's cardinality.
#[derive(Clone)]
pub struct PostgresFavouriteRepository {
    pool: PgPool,
}

impl PostgresFavouriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavouriteRepository for PostgresFavouriteRepository {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let inserted = sqlx::query(
            "INSERT INTO favourites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT (user_id, article_id) DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected()
            == 1;

        if inserted {
            sqlx::query("UPDATE articles SET favourites_count = favourites_count + 1 WHERE id = $1")
                .bind(i64::from(article_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(inserted)
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query(
            "DELETE FROM favourites WHERE user_id = $1 AND article_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected()
            == 1;

        if removed {
            sqlx::query("UPDATE articles SET favourites_count = favourites_count - 1 WHERE id = $1")
                .bind(i64::from(article_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed)
    }

    async fn is_favourited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let favourited: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favourites WHERE user_id = $1 AND article_id = $2)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(favourited)
    }

    async fn article_ids_for_user(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT article_id FROM favourites WHERE user_id = $1")
                .bind(i64::from(user_id))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        ids.into_iter().map(ArticleId::new).collect()
    }
}
