//! Session lifecycle tests: hydration, logout guarantees, route guards.

use paylite_sdk::auth::{GuardDecision, RouteKind, UserProfile};
use paylite_sdk::client::PayliteClient;
use paylite_sdk::store::{AuthStore, MemoryStore, Store};

use std::sync::Arc;
use std::time::Duration;

fn sample_user() -> UserProfile {
    UserProfile {
        id: "usr_1".to_string(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        mobile_number: Some("9876543210".to_string()),
        email_verified: true,
        kyc_status: None,
        created_at: None,
    }
}

fn seeded_store() -> Arc<MemoryStore> {
    let durable = Arc::new(MemoryStore::new());
    AuthStore::new(Store::new(durable.clone())).save_session("at", "rt", &sample_user());
    durable
}

#[tokio::test]
async fn logout_clears_local_state_even_when_remote_rejects() {
    // Point the client at a dead port so the remote logout call fails.
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = dead.local_addr().unwrap();
    drop(dead);

    let durable = seeded_store();
    let client = PayliteClient::builder()
        .base_url(&format!("http://{}", addr))
        .timeout(Duration::from_millis(500))
        .durable_store(durable.clone())
        .build()
        .unwrap();

    assert!(client.session().is_authenticated().await);

    client.auth().logout().await.unwrap();

    assert!(!client.session().is_authenticated().await);
    let store = AuthStore::new(Store::new(durable));
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn hydrated_client_guards_routes() {
    let client = PayliteClient::builder()
        .durable_store(seeded_store())
        .build()
        .unwrap();

    assert_eq!(
        client.session().guard(RouteKind::Protected).await,
        GuardDecision::Allow
    );
    assert_eq!(
        client.session().guard(RouteKind::AuthOnly).await,
        GuardDecision::RedirectToDashboard
    );
}

#[tokio::test]
async fn unauthenticated_client_is_redirected_off_protected_routes() {
    let client = PayliteClient::builder().build().unwrap();

    assert!(!client.session().is_authenticated().await);
    assert_eq!(
        client.session().guard(RouteKind::Protected).await,
        GuardDecision::RedirectToLogin
    );
    assert_eq!(
        client.session().guard(RouteKind::AuthOnly).await,
        GuardDecision::Allow
    );
}

#[tokio::test]
async fn session_reads_are_idempotent() {
    let client = PayliteClient::builder()
        .durable_store(seeded_store())
        .build()
        .unwrap();

    let first = client.session().user().await.map(|u| u.id);
    let second = client.session().user().await.map(|u| u.id);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("usr_1"));
}
