pub mod book_service;
pub mod customer_service;
pub mod login_service;
pub mod order_service;
