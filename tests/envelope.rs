use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bookstore_api::{error::AppError, response::ApiResponse};
use serde_json::{Value, json};

async fn render(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

#[tokio::test]
async fn success_carries_status_and_data() {
    let response = ApiResponse::success("Book retrieved successfully", json!({"id": 1}));
    let (status, body) = render(response.into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": 200,
            "result": true,
            "message": "Book retrieved successfully",
            "data": {"id": 1}
        })
    );
}

#[tokio::test]
async fn not_found_is_http_200_with_result_false() {
    let (status, body) = render(AppError::not_found("Order not found").into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "result": false,
            "message": "Order not found",
            "data": null
        })
    );
}

#[tokio::test]
async fn insufficient_points_uses_the_error_shape() {
    let (status, body) = render(AppError::InsufficientPoints.into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["result"], json!(false));
    assert_eq!(body["error"], json!("Insufficient points to make the purchase"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn duplicate_email_uses_the_error_shape() {
    let (status, body) = render(AppError::EmailTaken.into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["message"], json!("Email is already taken"));
}

#[tokio::test]
async fn store_failure_is_an_exception() {
    let err = AppError::DbError(sqlx::Error::PoolTimedOut);
    let (status, body) = render(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "status": 500,
            "result": false,
            "message": "Internal Server Error",
            "error": format!("Database error: {}", sqlx::Error::PoolTimedOut)
        })
    );
}

#[tokio::test]
async fn internal_failure_carries_its_message() {
    let err = AppError::Internal(anyhow::anyhow!("book 999 does not exist"));
    let (status, body) = render(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], json!("Internal Server Error"));
    assert_eq!(body["error"], json!("book 999 does not exist"));
}

#[tokio::test]
async fn no_content_uses_http_204() {
    let response = (
        StatusCode::NO_CONTENT,
        ApiResponse::<()>::no_content("Order canceled successfully"),
    )
        .into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
