// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, favourites::FavouriteCommandService,
            profiles::ProfileCommandService,
        },
        ports::{
            security::Authenticator,
            time::Clock,
            util::{SlugGenerator, SuffixSource},
        },
        queries::{
            articles::ArticleQueryService, profiles::ProfileQueryService, tags::TagQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        favourite::FavouriteRepository,
        follow::FollowRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub favourite_commands: Arc<FavouriteCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    authenticator: Arc<dyn Authenticator>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        favourite_repo: Arc<dyn FavouriteRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        tag_repo: Arc<dyn TagRepository>,
        authenticator: Arc<dyn Authenticator>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixSource>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(slugger, suffixes));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&favourite_repo),
            slug_service,
            clock,
        ));

        let favourite_commands = Arc::new(FavouriteCommandService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&favourite_repo),
            Arc::clone(&follow_repo),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            Arc::clone(&user_repo),
            favourite_repo,
            Arc::clone(&follow_repo),
        ));

        let profile_queries = Arc::new(ProfileQueryService::new(user_repo, follow_repo));
        let tag_queries = Arc::new(TagQueryService::new(tag_repo));

        Self {
            article_commands,
            favourite_commands,
            profile_commands,
            article_queries,
            profile_queries,
            tag_queries,
            authenticator,
        }
    }

    pub fn authenticator(&self) -> Arc<dyn Authenticator> {
        Arc::clone(&self.authenticator)
    }
}
