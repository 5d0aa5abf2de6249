use axum::{Router, extract::State, routing::post};

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    response::ApiResponse,
    routes::extract::AppJson,
    services::login_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(login))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login result; result=false for unknown email or wrong password", body = ApiResponse<LoginResponse>)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    match login_service::login(&state.logins(), payload).await? {
        Some(resp) => Ok(ApiResponse::success("Login successful", resp)),
        None => Err(AppError::not_found("User not found or invalid password")),
    }
}
