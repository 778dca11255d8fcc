// tests/support/memory.rs
use std::collections::{HashMap, HashSet};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;

use kawaraban_core::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use kawaraban_core::domain::errors::{DomainError, DomainResult};
use kawaraban_core::domain::favourite::FavouriteRepository;
use kawaraban_core::domain::follow::FollowRepository;
use kawaraban_core::domain::tag::TagRepository;
use kawaraban_core::domain::user::{User, UserId, UserRepository};

/* -------------------------------- articles -------------------------------- */

/// インメモリの記事リポジトリ（読み書き両方を実装）
pub struct InMemoryArticleRepository {
    rows: Mutex<HashMap<i64, Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Counter maintenance hook for the favourites repository; mirrors the
    /// conditional UPDATE the Postgres adapter runs in the same transaction.
    pub fn adjust_favourites_count(&self, article_id: ArticleId, delta: i64) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(article) = rows.get_mut(&i64::from(article_id)) {
            article.favourites_count += delta;
        }
    }

    fn matches(article: &Article, filter: &ArticleListFilter) -> bool {
        if let Some(tag) = &filter.tag {
            if !article.tag_list.join(",").contains(tag.as_str()) {
                return false;
            }
        }
        if let Some(author_ids) = &filter.author_ids {
            if !author_ids.contains(&article.author_id) {
                return false;
            }
        }
        if let Some(ids) = &filter.ids {
            if !ids.contains(&article.id) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();

        if rows
            .values()
            .any(|existing| existing.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            favourites_count: 0,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        Ok(u64::from(rows.remove(&i64::from(id)).is_some()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|article| article.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Article> = rows
            .values()
            .filter(|article| Self::matches(article, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ArticleListFilter) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|article| Self::matches(article, filter))
            .count() as u64)
    }
}

/* --------------------------------- users ---------------------------------- */

/// インメモリのユーザーリポジトリ
pub struct InMemoryUserRepository {
    rows: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }

    pub fn seed(&self, user: User) {
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(user.id), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }
}

/* ------------------------------- favourites -------------------------------- */

/// インメモリのお気に入りリポジトリ。ペアの変化があった時だけ
/// 記事側のカウンタを動かす（Postgres 実装と同じ契約）。
pub struct InMemoryFavouriteRepository {
    pairs: Mutex<HashSet<(i64, i64)>>,
    articles: Arc<InMemoryArticleRepository>,
}

impl InMemoryFavouriteRepository {
    pub fn new(articles: Arc<InMemoryArticleRepository>) -> Self {
        Self {
            pairs: Mutex::new(HashSet::new()),
            articles,
        }
    }
}

#[async_trait]
impl FavouriteRepository for InMemoryFavouriteRepository {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let inserted = {
            let mut pairs = self.pairs.lock().unwrap();
            pairs.insert((i64::from(user_id), i64::from(article_id)))
        };
        if inserted {
            self.articles.adjust_favourites_count(article_id, 1);
        }
        Ok(inserted)
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let removed = {
            let mut pairs = self.pairs.lock().unwrap();
            pairs.remove(&(i64::from(user_id), i64::from(article_id)))
        };
        if removed {
            self.articles.adjust_favourites_count(article_id, -1);
        }
        Ok(removed)
    }

    async fn is_favourited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let pairs = self.pairs.lock().unwrap();
        Ok(pairs.contains(&(i64::from(user_id), i64::from(article_id))))
    }

    async fn article_ids_for_user(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>> {
        let pairs = self.pairs.lock().unwrap();
        let mut ids: Vec<i64> = pairs
            .iter()
            .filter(|(user, _)| *user == i64::from(user_id))
            .map(|(_, article)| *article)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(ArticleId::new).collect()
    }
}

/* --------------------------------- follows --------------------------------- */

/// インメモリのフォローリポジトリ
pub struct InMemoryFollowRepository {
    edges: Mutex<HashSet<(i64, i64)>>,
}

impl InMemoryFollowRepository {
    pub fn new() -> Self {
        Self {
            edges: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn follow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool> {
        let mut edges = self.edges.lock().unwrap();
        Ok(edges.insert((i64::from(follower_id), i64::from(following_id))))
    }

    async fn unfollow(&self, follower_id: UserId, following_id: UserId) -> DomainResult<bool> {
        let mut edges = self.edges.lock().unwrap();
        Ok(edges.remove(&(i64::from(follower_id), i64::from(following_id))))
    }

    async fn is_following(
        &self,
        follower_id: UserId,
        following_id: UserId,
    ) -> DomainResult<bool> {
        let edges = self.edges.lock().unwrap();
        Ok(edges.contains(&(i64::from(follower_id), i64::from(following_id))))
    }

    async fn following_ids(&self, follower_id: UserId) -> DomainResult<Vec<UserId>> {
        let edges = self.edges.lock().unwrap();
        let mut ids: Vec<i64> = edges
            .iter()
            .filter(|(follower, _)| *follower == i64::from(follower_id))
            .map(|(_, following)| *following)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(UserId::new).collect()
    }
}

/* ---------------------------------- tags ----------------------------------- */

pub struct InMemoryTagRepository {
    names: Vec<String>,
}

impl InMemoryTagRepository {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn list(&self) -> DomainResult<Vec<String>> {
        Ok(self.names.clone())
    }
}
