use kawaraban_core::application::{
    ports::{
        security::Authenticator,
        time::Clock,
        util::{SlugGenerator, SuffixSource},
    },
    services::ApplicationServices,
};
use kawaraban_core::config::AppConfig;
use kawaraban_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    favourite::FavouriteRepository,
    follow::FollowRepository,
    tag::TagRepository,
    user::UserRepository,
};
use kawaraban_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresFavouriteRepository,
        PostgresFollowRepository, PostgresTagRepository, PostgresUserRepository,
    },
    security::HmacTokenAuthenticator,
    time::SystemClock,
    util::{Base36SuffixSource, DefaultSlugGenerator},
};
use kawaraban_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let favourite_repo: Arc<dyn FavouriteRepository> =
        Arc::new(PostgresFavouriteRepository::new(pool.clone()));
    let follow_repo: Arc<dyn FollowRepository> =
        Arc::new(PostgresFollowRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));

    let authenticator: Arc<dyn Authenticator> = Arc::new(HmacTokenAuthenticator::new(
        config.auth_token_secret().as_bytes().to_vec(),
        Arc::clone(&user_repo),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let suffixes: Arc<dyn SuffixSource> = Arc::new(Base36SuffixSource);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        user_repo,
        favourite_repo,
        follow_repo,
        tag_repo,
        authenticator,
        clock,
        slugger,
        suffixes,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
