use std::time::Duration;

use axum::{Router, routing::get};
use hm_core::{Provenance, TopicCatalog, TopicFilter};
use hm_client::{ClientConfig, TopicError, TopicRepository};

use crate::common::{closed_port_url, repository, spawn_router, spawn_topic_server};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_live_topics_from_server() {
    let addr = spawn_topic_server().await;
    let repo = repository(&format!("http://{addr}"), TIMEOUT);

    let topics = repo.topics().await;
    assert_eq!(topics.provenance, Provenance::Live);
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[4].title, "Rust Ownership");
}

#[tokio::test]
async fn test_zero_timeout_config_still_reaches_server() {
    let addr = spawn_topic_server().await;
    let mut config = ClientConfig::new(format!("http://{addr}"));
    config.api_timeout_secs = 0;

    let repo = TopicRepository::from_config(&config).unwrap();
    assert_eq!(repo.topics().await.provenance, Provenance::Live);
}

#[tokio::test]
async fn test_live_detail_and_questions() {
    let addr = spawn_topic_server().await;
    let repo = repository(&format!("http://{addr}"), TIMEOUT);

    let detail = repo.topic_detail("5").await.unwrap();
    assert!(detail.is_live());
    assert_eq!(detail.topic.category, "Systems");

    let questions = repo.topic_questions("5").await.unwrap();
    assert!(questions.is_live());
    assert_eq!(questions.value, vec!["What does the borrow checker enforce?".to_string()]);
}

#[tokio::test]
async fn test_unknown_id_on_live_server_is_not_found() {
    let addr = spawn_topic_server().await;
    let repo = repository(&format!("http://{addr}"), TIMEOUT);

    // 404 from the server engages the fallback, which misses as well
    let err = repo.topic_detail("does-not-exist").await.unwrap_err();
    assert_eq!(err, TopicError::NotFound("does-not-exist".to_string()));
}

#[tokio::test]
async fn test_connection_refused_uses_fallback() {
    let repo = repository(&closed_port_url().await, TIMEOUT);

    let topics = repo.topics().await;
    assert!(topics.is_fallback());
    assert_eq!(topics.value, TopicCatalog::fallback().topics().to_vec());

    let detail = repo.topic_detail("1").await.unwrap();
    assert!(detail.is_fallback());
    assert_eq!(detail.topic.id, "1");

    assert!(repo.topic_detail("does-not-exist").await.is_err());
}

#[tokio::test]
async fn test_undecodable_body_uses_fallback() {
    let router = Router::new().route("/api/topics", get(|| async { "<html>maintenance</html>" }));
    let addr = spawn_router(router).await;
    let repo = repository(&format!("http://{addr}"), TIMEOUT);

    let topics = repo.topics().await;
    assert!(topics.is_fallback());
    assert_eq!(topics.len(), 4);
}

#[tokio::test]
async fn test_timeout_uses_fallback() {
    let router = Router::new().route(
        "/api/topics",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        }),
    );
    let addr = spawn_router(router).await;
    let repo = repository(&format!("http://{addr}"), Duration::from_millis(200));

    let topics = repo.topics().await;
    assert!(topics.is_fallback());
}

#[tokio::test]
async fn test_concurrent_calls_share_nothing() {
    let addr = spawn_topic_server().await;
    let repo = repository(&format!("http://{addr}"), TIMEOUT);
    let cloned = repo.clone();
    let mobile = TopicFilter::new().category("Mobile");

    let (a, b, c) = tokio::join!(
        repo.topics(),
        repo.topic_detail("2"),
        cloned.filtered_topics(&mobile),
    );

    assert!(a.is_live());
    assert_eq!(b.unwrap().topic.title, "Kotlin Coroutines");
    assert_eq!(c.len(), 2);
}
