mod common;

use bookstore_api::{
    error::AppError,
    repositories::InMemoryStore,
    routes::params::Pagination,
    services::book_service,
};

use common::{book, seed_books};

#[tokio::test]
async fn second_page_of_five_returns_books_six_to_ten() {
    let store = InMemoryStore::new();
    let titles: Vec<String> = (1..=12).map(|i| format!("Book {i}")).collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    seed_books(&store, &titles).await;

    let page = book_service::list_books(&store, &Pagination::new(2, 5))
        .await
        .expect("list books");

    let ids: Vec<i32> = page.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    assert_eq!(page.total_items, 12);
}

#[tokio::test]
async fn defaults_to_first_page_of_ten() {
    let store = InMemoryStore::new();
    let titles: Vec<String> = (1..=15).map(|i| format!("Book {i}")).collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    seed_books(&store, &titles).await;

    let page = book_service::list_books(&store, &Pagination::default())
        .await
        .expect("list books");

    assert_eq!(page.books.len(), 10);
    assert_eq!(page.books[0].id, 1);
    assert_eq!(page.total_items, 15);
}

#[test]
fn non_positive_values_fall_back_to_defaults() {
    assert_eq!(Pagination::new(0, 0).normalize(), (1, 10, 0));
    assert_eq!(Pagination::new(-4, -1).normalize(), (1, 10, 0));
    assert_eq!(Pagination::new(3, 500).normalize(), (3, 500, 1000));
    assert_eq!(Pagination::default().normalize(), (1, 10, 0));
}

#[tokio::test]
async fn large_page_size_returns_every_book() {
    let store = InMemoryStore::new();
    let titles: Vec<String> = (1..=150).map(|i| format!("Book {i}")).collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    seed_books(&store, &titles).await;

    let page = book_service::list_books(&store, &Pagination::new(1, 150))
        .await
        .expect("list books");

    assert_eq!(page.books.len(), 150);
    assert_eq!(page.total_items, 150);
}

#[tokio::test]
async fn huge_page_number_is_an_empty_page() {
    let store = InMemoryStore::new();
    seed_books(&store, &["Emma", "Dune"]).await;

    let page = book_service::list_books(&store, &Pagination::new(i64::MAX, 10))
        .await
        .expect("list books");

    assert!(page.books.is_empty());
    assert_eq!(page.total_items, 2);
    assert_eq!(Pagination::new(i64::MAX, i64::MAX).normalize().2, i64::MAX);
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let store = InMemoryStore::new();
    seed_books(&store, &["The Lord of the Rings", "lord jim", "Dune"]).await;

    let found = book_service::search_by_title(&store, "LORD")
        .await
        .expect("search");

    let titles: Vec<&str> = found.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Lord of the Rings", "lord jim"]);
}

#[tokio::test]
async fn search_covers_the_whole_catalog() {
    let store = InMemoryStore::new();
    let titles: Vec<String> = (1..=25).map(|i| format!("Volume {i}")).collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    seed_books(&store, &titles).await;

    let found = book_service::search_by_title(&store, "volume 2")
        .await
        .expect("search");

    // "Volume 2" and "Volume 20" through "Volume 25"
    assert_eq!(found.len(), 7);
}

#[tokio::test]
async fn search_without_match_is_empty() {
    let store = InMemoryStore::new();
    seed_books(&store, &["Dune"]).await;

    let found = book_service::search_by_title(&store, "emma").await.expect("search");
    assert!(found.is_empty());
}

#[tokio::test]
async fn add_then_get_book() {
    let store = InMemoryStore::new();
    let added = book_service::add_book(&store, book("Middlemarch", 20))
        .await
        .expect("add book");

    let fetched = book_service::get_book(&store, added.id).await.expect("get book");
    assert_eq!(fetched, added);
    assert_eq!(fetched.tags, vec!["fiction".to_string()]);
}

#[tokio::test]
async fn missing_book_is_not_found() {
    let store = InMemoryStore::new();
    let err = book_service::get_book(&store, 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Book not found"));
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let store = InMemoryStore::new();
    let err = book_service::add_book(&store, book("  ", 20)).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}
