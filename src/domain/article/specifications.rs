use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Mutating operations on an article are reserved to its author. The check
/// runs before any write, so a failed authorization leaves no side effects.
pub struct IsArticleAuthorSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> IsArticleAuthorSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for IsArticleAuthorSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}
