use bookstore_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.message, "Health check");
    assert!(response.result);

    let data = response.data.expect("health data");
    assert_eq!(data.status, "ok");
}
