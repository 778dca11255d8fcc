// tests/support/mod.rs
#![allow(dead_code)]
#![allow(clippy::new_without_default)]

pub mod builders;
pub mod memory;
pub mod mocks;

use std::sync::Arc;

use kawaraban_core::application::commands::articles::ArticleCommandService;
use kawaraban_core::application::commands::favourites::FavouriteCommandService;
use kawaraban_core::application::commands::profiles::ProfileCommandService;
use kawaraban_core::application::dto::AuthenticatedUser;
use kawaraban_core::application::queries::articles::ArticleQueryService;
use kawaraban_core::application::queries::profiles::ProfileQueryService;
use kawaraban_core::domain::article::services::ArticleSlugService;
use kawaraban_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kawaraban_core::domain::favourite::FavouriteRepository;
use kawaraban_core::domain::follow::FollowRepository;
use kawaraban_core::domain::user::UserRepository;
use kawaraban_core::infrastructure::util::{Base36SuffixSource, DefaultSlugGenerator};

use builders::UserBuilder;
use memory::{
    InMemoryArticleRepository, InMemoryFavouriteRepository, InMemoryFollowRepository,
    InMemoryUserRepository,
};
use mocks::TickingClock;

/// Everything wired over the in-memory repositories, with handles kept so
/// tests can seed and inspect the stores directly.
pub struct TestContext {
    pub articles: Arc<InMemoryArticleRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub favourites: Arc<InMemoryFavouriteRepository>,
    pub follows: Arc<InMemoryFollowRepository>,
    pub article_commands: ArticleCommandService,
    pub article_queries: ArticleQueryService,
    pub favourite_commands: FavouriteCommandService,
    pub profile_commands: ProfileCommandService,
    pub profile_queries: ProfileQueryService,
}

impl TestContext {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticleRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let favourites = Arc::new(InMemoryFavouriteRepository::new(Arc::clone(&articles)));
        let follows = Arc::new(InMemoryFollowRepository::new());

        // Trait-object views over the concrete handles, so the services (which
        // take `Arc<dyn _Repository>`) can be wired while the struct keeps the
        // concrete `Arc`s for seeding and inspection.
        let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
        let article_read: Arc<dyn ArticleReadRepository> = articles.clone();
        let users_dyn: Arc<dyn UserRepository> = users.clone();
        let favourites_dyn: Arc<dyn FavouriteRepository> = favourites.clone();
        let follows_dyn: Arc<dyn FollowRepository> = follows.clone();

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::new(DefaultSlugGenerator),
            Arc::new(Base36SuffixSource),
        ));
        let clock = Arc::new(TickingClock::new());

        let article_commands = ArticleCommandService::new(
            Arc::clone(&article_write),
            Arc::clone(&article_read),
            Arc::clone(&users_dyn),
            Arc::clone(&favourites_dyn),
            slug_service,
            clock,
        );

        let article_queries = ArticleQueryService::new(
            Arc::clone(&article_read),
            Arc::clone(&users_dyn),
            Arc::clone(&favourites_dyn),
            Arc::clone(&follows_dyn),
        );

        let favourite_commands = FavouriteCommandService::new(
            Arc::clone(&article_read),
            Arc::clone(&users_dyn),
            Arc::clone(&favourites_dyn),
            Arc::clone(&follows_dyn),
        );

        let profile_commands =
            ProfileCommandService::new(Arc::clone(&users_dyn), Arc::clone(&follows_dyn));
        let profile_queries =
            ProfileQueryService::new(Arc::clone(&users_dyn), Arc::clone(&follows_dyn));

        Self {
            articles,
            users,
            favourites,
            follows,
            article_commands,
            article_queries,
            favourite_commands,
            profile_commands,
            profile_queries,
        }
    }

    /// Seed a user and hand back the identity the services expect.
    pub fn seed_user(&self, id: i64, username: &str) -> AuthenticatedUser {
        let user = UserBuilder::new(id, username).build();
        let actor = AuthenticatedUser {
            id: user.id,
            username: user.username.to_string(),
        };
        self.users.seed(user);
        actor
    }
}
