use axum::{Router, extract::State, routing::get};

use crate::{
    dto::books::{AddBookRequest, BookPage},
    error::{AppError, AppResult},
    models::Book,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppPath, AppQuery},
        params::{Pagination, SearchQuery},
    },
    services::book_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .route("/search", get(search_books))
        .route("/{id}", get(get_book))
}

#[utoipa::path(
    get,
    path = "/api/books",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("pageSize" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "One page of books plus the total count", body = ApiResponse<BookPage>)
    ),
    tag = "Books"
)]
pub async fn list_books(
    State(state): State<AppState>,
    AppQuery(pagination): AppQuery<Pagination>,
) -> AppResult<ApiResponse<BookPage>> {
    let page = book_service::list_books(&state.books(), &pagination).await?;
    Ok(ApiResponse::success("Books retrieved successfully", page))
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = AddBookRequest,
    responses(
        (status = 200, description = "Book added", body = ApiResponse<Book>)
    ),
    tag = "Books"
)]
pub async fn add_book(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddBookRequest>,
) -> AppResult<ApiResponse<Book>> {
    let book = book_service::add_book(&state.books(), payload).await?;
    Ok(ApiResponse::success("Book added successfully", book))
}

#[utoipa::path(
    get,
    path = "/api/books/search",
    params(
        ("title" = String, Query, description = "Case-insensitive title fragment")
    ),
    responses(
        (status = 200, description = "Matching books, or result=false when none match", body = ApiResponse<Vec<Book>>)
    ),
    tag = "Books"
)]
pub async fn search_books(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let title = query
        .title
        .ok_or_else(|| AppError::bad_request("title is required"))?;
    let books = book_service::search_by_title(&state.books(), &title).await?;
    if books.is_empty() {
        return Err(AppError::not_found("No books found"));
    }
    Ok(ApiResponse::success("Books retrieved successfully", books))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book, or result=false when it does not exist", body = ApiResponse<Book>)
    ),
    tag = "Books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<ApiResponse<Book>> {
    let book = book_service::get_book(&state.books(), id).await?;
    Ok(ApiResponse::success("Book retrieved successfully", book))
}
