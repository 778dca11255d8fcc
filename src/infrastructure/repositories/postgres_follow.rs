// src/infrastructure/repositories/postgres_follow.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::follow::FollowRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool> {
        let inserted = sqlx::query(
            "INSERT INTO follows (follower_id, following_id) VALUES ($1, $2)
             ON CONFLICT (follower_id, following_id) DO NOTHING",
        )
        .bind(i64::from(follower_id))
        .bind(i64::from(following_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn unfollow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool> {
        let removed =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
                .bind(i64::from(follower_id))
                .bind(i64::from(following_id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?
                .rows_affected();

        Ok(removed == 1)
    }

    async fn is_following(
        &self,
        follower_id: UserId,
        following_id: UserId,
    ) -> DomainResult<bool> {
        let following: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)",
        )
        .bind(i64::from(follower_id))
        .bind(i64::from(following_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(following)
    }

    async fn following_ids(&self, follower_id: UserId) -> DomainResult<Vec<UserId>> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT following_id FROM follows WHERE follower_id = $1")
                .bind(i64::from(follower_id))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }
}
