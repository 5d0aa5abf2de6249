pub mod auth;
pub mod books;
pub mod customers;
pub mod orders;
