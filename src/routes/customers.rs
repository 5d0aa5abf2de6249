use axum::{Router, extract::State, routing::get};

use crate::{
    dto::customers::RegisterRequest,
    error::AppResult,
    models::{Customer, CustomerOrder},
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route("/{id}/orders", get(customer_orders))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers", body = ApiResponse<Vec<Customer>>)
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Customer>>> {
    let customers = customer_service::list_customers(&state.customers()).await?;
    Ok(ApiResponse::success("Customers retrieved successfully", customers))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Customer registered with the starting points", body = ApiResponse<Customer>)
    ),
    tag = "Customers"
)]
pub async fn register_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<ApiResponse<Customer>> {
    let customer = customer_service::register(&state.customers(), payload).await?;
    Ok(ApiResponse::success("Customer registered successfully", customer))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Order rows joined with books and status", body = ApiResponse<Vec<CustomerOrder>>)
    ),
    tag = "Customers"
)]
pub async fn customer_orders(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<ApiResponse<Vec<CustomerOrder>>> {
    let orders =
        customer_service::orders_for_customer(&state.customers(), &state.orders(), id).await?;
    Ok(ApiResponse::success("Orders retrieved successfully", orders))
}
