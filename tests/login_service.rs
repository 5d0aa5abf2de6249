mod common;

use chrono::{Duration, Utc};

use bookstore_api::{
    dto::auth::LoginRequest,
    models::CUSTOMER_ROLE,
    repositories::InMemoryStore,
    services::{customer_service, login_service},
};

use common::register;

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn correct_credentials_return_the_profile() {
    let store = InMemoryStore::new();
    let customer = register(&store, "Ada", "ada@example.com").await;
    customer_service::deduct_points(&store, customer.id, 25).await.unwrap();

    let before = Utc::now();
    let resp = login_service::login(&store, credentials("ada@example.com", "secret-pass"))
        .await
        .unwrap()
        .expect("login succeeds");

    assert_eq!(resp.user_id, customer.user_id);
    assert_eq!(resp.role, CUSTOMER_ROLE);
    assert_eq!(resp.name.as_deref(), Some("Ada"));
    assert_eq!(resp.points, Some(75));
    assert!(resp.last_login >= before);
    assert!(resp.last_login - before < Duration::seconds(5));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let store = InMemoryStore::new();
    register(&store, "Ada", "ada@example.com").await;

    let wrong_password = login_service::login(&store, credentials("ada@example.com", "nope"))
        .await
        .unwrap();
    let unknown_email = login_service::login(&store, credentials("eve@example.com", "secret-pass"))
        .await
        .unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
}

#[test]
fn hashes_are_salted() {
    let first = login_service::hash_password("same").unwrap();
    let second = login_service::hash_password("same").unwrap();
    assert_ne!(first, second);
}
