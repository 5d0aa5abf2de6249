use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::orders::PlaceOrderRequest,
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(place_order))
        .route("/{id}", get(get_order).put(cancel_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All order rows", body = ApiResponse<Vec<Order>>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Order>>> {
    let orders = order_service::list_orders(&state.orders()).await?;
    Ok(ApiResponse::success("Orders retrieved successfully", orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed; one row per book", body = ApiResponse<Vec<Order>>),
        (status = 500, description = "Store failure; nothing was written")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PlaceOrderRequest>,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let orders = order_service::place_order(&state.orders(), payload).await?;
    Ok(ApiResponse::success("Order placed successfully", orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order row, or result=false when it does not exist", body = ApiResponse<Order>)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<ApiResponse<Order>> {
    let order = order_service::get_order(&state.orders(), id).await?;
    Ok(ApiResponse::success("Order retrieved successfully", order))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order cancelled"),
        (status = 200, description = "Order not found (result=false)")
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<(StatusCode, ApiResponse<()>)> {
    order_service::cancel_order(&state.orders(), id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        ApiResponse::no_content("Order canceled successfully"),
    ))
}
