use kawaraban_core::application::commands::articles::CreateArticleCommand;
use kawaraban_core::application::dto::{ArticleDeletionDto, ArticlesPageDto};
use serde_json::json;

mod support;

use support::TestContext;

#[tokio::test]
async fn article_payloads_use_the_camel_case_wire_names() {
    let ctx = TestContext::new();
    let actor = ctx.seed_user(1, "iroha");
    let command = CreateArticleCommand::builder()
        .title("Hello World")
        .description("a greeting")
        .body("hi there")
        .tag_list(vec!["dragons".into()])
        .build()
        .unwrap();
    let article = ctx
        .article_commands
        .create_article(&actor, command)
        .await
        .unwrap();

    let value = serde_json::to_value(&article).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "slug",
        "title",
        "description",
        "body",
        "tagList",
        "createdAt",
        "updatedAt",
        "favourited",
        "favouritesCount",
        "author",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(value["tagList"], json!(["dragons"]));
    assert_eq!(value["favouritesCount"], json!(0));
    assert_eq!(value["author"]["username"], json!("iroha"));
    assert_eq!(value["author"]["following"], json!(false));
}

#[test]
fn page_payload_reports_articles_count() {
    let page = ArticlesPageDto::empty();
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value, json!({ "articles": [], "articlesCount": 0 }));
}

#[test]
fn deletion_payload_reports_rows_affected() {
    let value = serde_json::to_value(ArticleDeletionDto { rows_affected: 1 }).unwrap();
    assert_eq!(value, json!({ "rowsAffected": 1 }));
}
