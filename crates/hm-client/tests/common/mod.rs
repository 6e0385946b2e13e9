use std::{net::SocketAddr, time::Duration};

use axum::Router;
use hm_api::state::ApiState;
use hm_client::{HttpTopicApi, TopicRepository};
use hm_core::{TopicCatalog, TopicDetail};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    addr
}

/// Catalog served by the live test server: the built-in topics plus one
/// topic that only exists live
pub fn live_catalog() -> TopicCatalog {
    let mut details: Vec<TopicDetail> = TopicCatalog::fallback()
        .topics()
        .iter()
        .filter_map(|t| TopicCatalog::fallback().detail(&t.id).cloned())
        .collect();

    let mut extra = details[0].clone();
    extra.topic.id = "5".to_string();
    extra.topic.title = "Rust Ownership".to_string();
    extra.topic.category = "Systems".to_string();
    extra.sample_questions = vec!["What does the borrow checker enforce?".to_string()];
    details.push(extra);

    TopicCatalog::from_details(details)
}

/// Start the real topic API server over [`live_catalog`]
pub async fn spawn_topic_server() -> SocketAddr {
    let router = hm_api::router::router().with_state(ApiState::with_catalog(live_catalog()));
    spawn_router(router).await
}

/// Base URL of a local port with nothing listening on it
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn repository(base_url: &str, timeout: Duration) -> TopicRepository {
    TopicRepository::new(HttpTopicApi::new(base_url, timeout).expect("Invalid test base URL"))
}
