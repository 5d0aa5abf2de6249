#![allow(dead_code)]

use bookstore_api::{
    dto::{
        books::AddBookRequest,
        customers::RegisterRequest,
        orders::{LineItem, PlaceOrderRequest, ShippingInfo},
    },
    models::{Book, Customer},
    repositories::{BookRepository, InMemoryStore},
    services::customer_service,
};

pub fn book(title: &str, price: i64) -> AddBookRequest {
    AddBookRequest {
        title: title.to_string(),
        writer: "Anon".to_string(),
        cover_image_url: format!("https://covers.example.com/{}.jpg", title.len()),
        price,
        tags: vec!["fiction".to_string()],
    }
}

pub async fn seed_books(store: &InMemoryStore, titles: &[&str]) -> Vec<Book> {
    let mut books = Vec::new();
    for title in titles {
        books.push(store.insert(book(title, 15)).await.expect("insert book"));
    }
    books
}

pub async fn register(store: &InMemoryStore, name: &str, email: &str) -> Customer {
    customer_service::register(
        store,
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "secret-pass".to_string(),
        },
    )
    .await
    .expect("register customer")
}

pub fn shipping() -> ShippingInfo {
    ShippingInfo {
        address: "12 Harbour Road".to_string(),
        city: "Portsmouth".to_string(),
        state: "Hampshire".to_string(),
        zip: "PO1 2AB".to_string(),
        phone_number: "+44 23 9200 0000".to_string(),
    }
}

pub fn order_request(
    customer_id: i32,
    book_ids: &[i32],
    quantity: i32,
    total: i64,
) -> PlaceOrderRequest {
    PlaceOrderRequest {
        customer_id,
        line_items: book_ids
            .iter()
            .map(|id| LineItem {
                book_id: *id,
                price: Some(15),
            })
            .collect(),
        quantity,
        total,
        shipping_info: shipping(),
    }
}
