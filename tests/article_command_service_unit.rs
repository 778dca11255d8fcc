use kawaraban_core::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use kawaraban_core::application::error::ApplicationError;
use kawaraban_core::domain::article::{ArticleReadRepository, ArticleSlug};
use kawaraban_core::domain::errors::DomainError;

mod support;

use support::TestContext;

fn hello_world() -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title("Hello World")
        .description("a greeting")
        .body("hi there")
        .build()
        .unwrap()
}

#[tokio::test]
async fn create_populates_slug_author_and_defaults() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");

    let article = ctx
        .article_commands
        .create_article(&actor, hello_world())
        .await
        .unwrap();

    let suffix = article
        .slug
        .strip_prefix("hello-world-")
        .expect("slug derives from the title");
    assert!((1..=6).contains(&suffix.len()));
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );

    assert_eq!(article.author.username, "iroha");
    assert!(article.tag_list.is_empty());
    assert_eq!(article.favourites_count, 0);
    assert!(!article.favourited);
    assert_eq!(article.created_at, article.updated_at);
}

#[tokio::test]
async fn create_keeps_the_supplied_tag_list() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");

    let command = CreateArticleCommand::builder()
        .title("Tagged")
        .description("with tags")
        .body("body")
        .tag_list(vec!["dragons".into(), "coffee".into()])
        .build()
        .unwrap();

    let article = ctx
        .article_commands
        .create_article(&actor, command)
        .await
        .unwrap();
    assert_eq!(article.tag_list, vec!["dragons", "coffee"]);
}

#[tokio::test]
async fn create_rejects_blank_fields() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");

    let command = CreateArticleCommand::builder()
        .title("   ")
        .description("a greeting")
        .body("hi there")
        .build()
        .unwrap();

    let err = ctx
        .article_commands
        .create_article(&actor, command)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_merges_fields_and_keeps_the_slug() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");
    let created = ctx
        .article_commands
        .create_article(&actor, hello_world())
        .await
        .unwrap();

    let updated = ctx
        .article_commands
        .update_article(
            &actor,
            UpdateArticleCommand {
                slug: created.slug.clone(),
                title: Some("New".into()),
                description: None,
                body: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, "a greeting");
    assert_eq!(updated.body, "hi there");
    assert_eq!(updated.slug, created.slug);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_by_non_owner_is_forbidden_and_leaves_the_row_alone() {
    let ctx = TestContext::new();
    let owner = ctx.seed_user(1, "iroha");
    let intruder = ctx.seed_user(2, "niko");
    let created = ctx
        .article_commands
        .create_article(&owner, hello_world())
        .await
        .unwrap();

    let err = ctx
        .article_commands
        .update_article(
            &intruder,
            UpdateArticleCommand {
                slug: created.slug.clone(),
                title: Some("Hijacked".into()),
                description: None,
                body: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let stored = ctx
        .articles
        .find_by_slug(&ArticleSlug::new(created.slug).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title.as_str(), "Hello World");
}

#[tokio::test]
async fn update_of_a_ghost_slug_is_not_found() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");

    let err = ctx
        .article_commands
        .update_article(
            &actor,
            UpdateArticleCommand {
                slug: "no-such-slug".into(),
                title: Some("New".into()),
                description: None,
                body: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_by_owner_removes_exactly_one_row() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");
    let created = ctx
        .article_commands
        .create_article(&actor, hello_world())
        .await
        .unwrap();

    let outcome = ctx
        .article_commands
        .delete_article(
            &actor,
            DeleteArticleCommand {
                slug: created.slug.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.rows_affected, 1);

    let gone = ctx
        .articles
        .find_by_slug(&ArticleSlug::new(created.slug).unwrap())
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() {
    let ctx = TestContext::new();
    let owner = ctx.seed_user(1, "iroha");
    let intruder = ctx.seed_user(2, "niko");
    let created = ctx
        .article_commands
        .create_article(&owner, hello_world())
        .await
        .unwrap();

    let err = ctx
        .article_commands
        .delete_article(
            &intruder,
            DeleteArticleCommand {
                slug: created.slug.clone(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let still_there = ctx
        .articles
        .find_by_slug(&ArticleSlug::new(created.slug).unwrap())
        .await
        .unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn delete_of_a_ghost_slug_is_not_found() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");

    let err = ctx
        .article_commands
        .delete_article(
            &actor,
            DeleteArticleCommand {
                slug: "no-such-slug".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
