use crate::{
    dto::books::{AddBookRequest, BookPage},
    error::{AppError, AppResult},
    models::Book,
    repositories::BookRepository,
    routes::params::Pagination,
};

pub async fn list_books<R: BookRepository>(
    repo: &R,
    pagination: &Pagination,
) -> AppResult<BookPage> {
    let (_, limit, offset) = pagination.normalize();
    let books = repo.list_page(limit, offset).await?;
    let total_items = repo.count().await?;
    Ok(BookPage { books, total_items })
}

/// Case-insensitive substring match on the title.
///
/// Filters the whole catalog in memory rather than in SQL.
pub async fn search_by_title<R: BookRepository>(repo: &R, title: &str) -> AppResult<Vec<Book>> {
    let needle = title.to_lowercase();
    let books = repo
        .list_all()
        .await?
        .into_iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect();
    Ok(books)
}

pub async fn add_book<R: BookRepository>(repo: &R, payload: AddBookRequest) -> AppResult<Book> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if payload.price < 0 {
        return Err(AppError::bad_request("price must not be negative"));
    }
    let book = repo.insert(payload).await?;
    tracing::info!(book_id = book.id, "book added");
    Ok(book)
}

pub async fn get_book<R: BookRepository>(repo: &R, id: i32) -> AppResult<Book> {
    match repo.find_by_id(id).await? {
        Some(book) => Ok(book),
        None => Err(AppError::not_found("Book not found")),
    }
}
