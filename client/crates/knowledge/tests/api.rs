//! Knowledge surface against the stub services.
//!
//! The directory stub is present because session refresh lives on the
//! directory origin; everything else here talks to the knowledge stub.

use std::sync::Arc;

use kernel::id::{ArticleBlockId, ArticleId};
use knowledge::api::KnowledgeApi;
use knowledge::block::{BlockType, NewBlock};
use knowledge::dto::{ArticleInfoUpdate, BlocksUpdate, NewArticle};
use knowledge::query::ArticleQuery;
use platform::Url;
use platform::client::PortalClient;
use platform::config::ClientConfig;
use platform::transport::HttpTransport;
use testutil::log::CallLog;
use testutil::server::{ServerGuard, spawn};
use testutil::stub::{self, AuthBehavior};

async fn knowledge_api(
    auth: AuthBehavior,
) -> (KnowledgeApi<HttpTransport>, CallLog, ServerGuard, ServerGuard) {
    let log = CallLog::new();
    let (directory_addr, directory_guard) = spawn(stub::directory_router(log.clone(), auth)).await;
    let (knowledge_addr, knowledge_guard) = spawn(stub::knowledge_router(log.clone(), auth)).await;
    let config = ClientConfig::new(
        Url::parse(&format!("http://{directory_addr}")).expect("stub address parses"),
        Url::parse(&format!("http://{knowledge_addr}")).expect("stub address parses"),
    );
    let client = Arc::new(PortalClient::connect(config).expect("client builds"));
    (
        KnowledgeApi::new(client),
        log,
        directory_guard,
        knowledge_guard,
    )
}

#[tokio::test]
async fn test_list_sends_category_and_paging() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let summaries = api.list(&ArticleQuery::all()).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].title, "Release checklist");
    assert_eq!(
        log.entries(),
        vec!["GET /api/knowlege?category=all&limit=10&offset=0"]
    );
}

#[tokio::test]
async fn test_article_comes_back_with_blocks() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let article = api.article(ArticleId::new(42)).await.unwrap();

    assert_eq!(article.id, ArticleId::new(42));
    assert_eq!(article.category, "processes");
    let contents: Vec<&str> = article
        .ordered_blocks()
        .iter()
        .map(|block| block.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Freeze the branch", "Run the smoke suite"]);
    assert_eq!(log.entries(), vec!["GET /api/knowlege/42"]);
}

#[tokio::test]
async fn test_create_article_is_acknowledged() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let created = api
        .create(&NewArticle {
            title: "Incident response".to_string(),
            description: Some("Who to page and when".to_string()),
            category: "processes".to_string(),
            blocks_data: vec![NewBlock::text("Page the on-call first", 0)],
        })
        .await
        .unwrap();

    assert!(created.ok);
    assert_eq!(created.article.id, ArticleId::new(7));
    assert_eq!(created.article.title, "Incident response");
    assert_eq!(log.entries(), vec!["POST /api/knowlege"]);
}

#[tokio::test]
async fn test_update_info_is_acknowledged_with_article_id() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let ack = api
        .update_info(
            ArticleId::new(42),
            &ArticleInfoUpdate {
                title: Some("Release checklist v2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(ack.ok);
    assert_eq!(ack.article_id, ArticleId::new(42));
    assert_eq!(log.entries(), vec!["PATCH /api/knowlege/42/info"]);
}

#[tokio::test]
async fn test_replace_blocks_sends_renumbered_payload() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let ack = api
        .replace_blocks(
            ArticleId::new(42),
            &BlocksUpdate::renumbered(vec![
                NewBlock::text("Freeze the branch", 9),
                NewBlock::new(BlockType::Image, "pipeline.png", 4),
            ]),
        )
        .await
        .unwrap();

    assert!(ack.ok);
    assert_eq!(ack.article_id, ArticleId::new(42));
    assert_eq!(log.entries(), vec!["PUT /api/knowlege/42/blocks"]);
}

#[tokio::test]
async fn test_update_single_block_echoes_the_stored_block() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    let ack = api
        .update_block(
            ArticleBlockId::new(5),
            &NewBlock::text("Run the full suite", 1),
        )
        .await
        .unwrap();

    assert!(ack.ok);
    assert_eq!(ack.block.id, ArticleBlockId::new(5));
    assert_eq!(ack.block.block_type, BlockType::Text);
    assert_eq!(ack.block.content, "Run the full suite");
    assert_eq!(ack.block.position, 1);
    assert_eq!(log.entries(), vec!["PUT /api/knowlege/blocks/5"]);
}

#[tokio::test]
async fn test_removals_answer_no_content() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::Valid).await;

    api.remove(ArticleId::new(42)).await.unwrap();
    api.remove_block(ArticleBlockId::new(5)).await.unwrap();

    assert_eq!(
        log.entries(),
        vec!["DELETE /api/knowlege/42", "DELETE /api/knowlege/blocks/5"]
    );
}

#[tokio::test]
async fn test_expired_session_refreshes_on_the_directory_origin() {
    let (api, log, _directory, _knowledge) = knowledge_api(AuthBehavior::ExpiredUntilRefresh).await;

    let article = api.article(ArticleId::new(42)).await.unwrap();

    assert_eq!(article.id, ArticleId::new(42));
    assert_eq!(
        log.entries(),
        vec![
            "GET /api/knowlege/42",
            "POST /api/auth/refresh",
            "GET /api/knowlege/42",
        ]
    );
}
