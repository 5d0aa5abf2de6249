//! Persistence seams. Services are generic over these traits; the Postgres
//! implementations back the server and [`memory::InMemoryStore`] mirrors their
//! semantics without a database.

use crate::{
    dto::{books::AddBookRequest, orders::ShippingInfo},
    error::AppResult,
    models::{Book, Customer, CustomerOrder, LoginRecord, Order},
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;

/// Data for a new user and its linked customer profile.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub points: i64,
}

/// Order-level fields shared by every row written for one checkout.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i32,
    pub book_ids: Vec<i32>,
    pub quantity: i32,
    pub total: i64,
    pub shipping: ShippingInfo,
}

pub trait BookRepository: Send + Sync {
    /// Books ordered by id ascending.
    fn list_page(
        &self,
        limit: i64,
        offset: i64,
    ) -> impl Future<Output = AppResult<Vec<Book>>> + Send;

    fn list_all(&self) -> impl Future<Output = AppResult<Vec<Book>>> + Send;

    fn count(&self) -> impl Future<Output = AppResult<i64>> + Send;

    fn insert(&self, book: AddBookRequest) -> impl Future<Output = AppResult<Book>> + Send;

    fn find_by_id(&self, id: i32) -> impl Future<Output = AppResult<Option<Book>>> + Send;
}

pub trait CustomerRepository: Send + Sync {
    fn list_all(&self) -> impl Future<Output = AppResult<Vec<Customer>>> + Send;

    fn email_exists(&self, email: &str) -> impl Future<Output = AppResult<bool>> + Send;

    /// Insert the user and customer rows together. Fails with
    /// `AppError::EmailTaken` when the email is already registered.
    fn create(&self, customer: NewCustomer) -> impl Future<Output = AppResult<Customer>> + Send;

    fn exists(&self, id: i32) -> impl Future<Output = AppResult<bool>> + Send;

    /// Relative decrement; returns false when no customer has this id.
    fn deduct_points(&self, id: i32, amount: i64) -> impl Future<Output = AppResult<bool>> + Send;
}

pub trait OrderRepository: Send + Sync {
    fn list_all(&self) -> impl Future<Output = AppResult<Vec<Order>>> + Send;

    fn find_by_id(&self, id: i32) -> impl Future<Output = AppResult<Option<Order>>> + Send;

    fn customer_points(
        &self,
        customer_id: i32,
    ) -> impl Future<Output = AppResult<Option<i64>>> + Send;

    /// Atomically deduct `points` from the customer and write one row per book.
    ///
    /// The balance is checked again under a row lock, so a concurrent order that
    /// drained the account yields `AppError::InsufficientPoints` with nothing written.
    fn place(
        &self,
        order: NewOrder,
        points: i64,
    ) -> impl Future<Output = AppResult<Vec<Order>>> + Send;

    fn set_status(
        &self,
        id: i32,
        status_id: i32,
    ) -> impl Future<Output = AppResult<()>> + Send;

    fn list_by_customer(
        &self,
        customer_id: i32,
    ) -> impl Future<Output = AppResult<Vec<CustomerOrder>>> + Send;
}

pub trait LoginRepository: Send + Sync {
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = AppResult<Option<LoginRecord>>> + Send;
}
