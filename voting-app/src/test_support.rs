use crate::config::ApiConfig;
use crate::infrastructure::api::VotingApiClient;
use axum::Router;
use std::time::Duration;

/// Serves `router` on an ephemeral port as the voting API and returns a
/// client pointed at it.
pub async fn spawn_fake_api(router: Router) -> VotingApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ApiConfig::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
    VotingApiClient::new(&config).unwrap()
}

/// A client whose API address refuses connections.
pub async fn unreachable_api() -> VotingApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    VotingApiClient::new(&config).unwrap()
}
