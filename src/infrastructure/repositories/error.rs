use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_FAVOURITES_CHECK: &str = "articles_favourites_count_nonnegative_chk";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_FAVOURITE_USER: &str = "favourites_user_id_fkey";
const CNT_FAVOURITE_ARTICLE: &str = "favourites_article_id_fkey";
const CNT_FOLLOW_FOLLOWER: &str = "follows_follower_id_fkey";
const CNT_FOLLOW_FOLLOWING: &str = "follows_following_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_FAVOURITE_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_FAVOURITE_USER | CNT_FOLLOW_FOLLOWER | CNT_FOLLOW_FOLLOWING => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_ARTICLE_FAVOURITES_CHECK => {
                        DomainError::Validation("favourites count cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
