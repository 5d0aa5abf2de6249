use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::{
    dto::books::AddBookRequest,
    error::{AppError, AppResult},
    models::{Book, Customer, CustomerOrder, LoginRecord, Order, OrderStatus},
};

use super::{
    BookRepository, CustomerRepository, LoginRepository, NewCustomer, NewOrder, OrderRepository,
};

#[derive(Debug, Clone)]
struct UserRow {
    id: i32,
    email: String,
    password_hash: String,
    role: String,
}

#[derive(Debug, Default)]
struct Tables {
    books: Vec<Book>,
    users: Vec<UserRow>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

/// Process-local store implementing every repository trait.
///
/// Each call holds one lock for its whole duration, which gives the same
/// all-or-nothing behaviour as the database transactions: a failed order
/// placement leaves both points and orders untouched.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("in-memory store lock poisoned")))
    }
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

impl BookRepository for InMemoryStore {
    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let tables = self.tables()?;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables.books.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables()?.books.clone())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables()?.books.len() as i64)
    }

    async fn insert(&self, book: AddBookRequest) -> AppResult<Book> {
        let mut tables = self.tables()?;
        let book = Book {
            id: next_id(tables.books.iter().map(|b| b.id)),
            title: book.title,
            writer: book.writer,
            cover_image_url: book.cover_image_url,
            price: book.price,
            tags: book.tags,
        };
        tables.books.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.tables()?.books.iter().find(|b| b.id == id).cloned())
    }
}

impl CustomerRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Customer>> {
        Ok(self.tables()?.customers.clone())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.tables()?.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        let mut tables = self.tables()?;
        // users.email carries a unique constraint
        if tables.users.iter().any(|u| u.email == customer.email) {
            return Err(AppError::EmailTaken);
        }
        let user_id = next_id(tables.users.iter().map(|u| u.id));
        tables.users.push(UserRow {
            id: user_id,
            email: customer.email,
            password_hash: customer.password_hash,
            role: customer.role,
        });
        let created = Customer {
            id: next_id(tables.customers.iter().map(|c| c.id)),
            user_id,
            name: customer.name,
            points: customer.points,
        };
        tables.customers.push(created.clone());
        Ok(created)
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables()?.customers.iter().any(|c| c.id == id))
    }

    async fn deduct_points(&self, id: i32, amount: i64) -> AppResult<bool> {
        let mut tables = self.tables()?;
        match tables.customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.points -= amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl OrderRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.tables()?.orders.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        Ok(self.tables()?.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn customer_points(&self, customer_id: i32) -> AppResult<Option<i64>> {
        Ok(self
            .tables()?
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .map(|c| c.points))
    }

    async fn place(&self, order: NewOrder, points: i64) -> AppResult<Vec<Order>> {
        let mut tables = self.tables()?;

        let balance = match tables.customers.iter().find(|c| c.id == order.customer_id) {
            Some(c) => c.points,
            None => return Err(AppError::not_found("Customer not found")),
        };
        if balance < points {
            return Err(AppError::InsufficientPoints);
        }
        // orders.book_id references books.id
        if let Some(missing) = order
            .book_ids
            .iter()
            .find(|id| !tables.books.iter().any(|b| b.id == **id))
        {
            return Err(AppError::Internal(anyhow::anyhow!(
                "book {missing} does not exist"
            )));
        }

        if let Some(customer) = tables.customers.iter_mut().find(|c| c.id == order.customer_id) {
            customer.points -= points;
        }

        let order_date = Utc::now();
        let mut next = next_id(tables.orders.iter().map(|o| o.id));
        let mut created = Vec::with_capacity(order.book_ids.len());
        for book_id in &order.book_ids {
            let row = Order {
                id: next,
                customer_id: order.customer_id,
                book_id: *book_id,
                order_date,
                quantity: order.quantity,
                total: order.total,
                status_id: OrderStatus::Placed.id(),
                address: order.shipping.address.clone(),
                city: order.shipping.city.clone(),
                state: order.shipping.state.clone(),
                zip: order.shipping.zip.clone(),
                phone_number: order.shipping.phone_number.clone(),
            };
            next += 1;
            created.push(row);
        }
        tables.orders.extend(created.iter().cloned());
        Ok(created)
    }

    async fn set_status(&self, id: i32, status_id: i32) -> AppResult<()> {
        let mut tables = self.tables()?;
        if let Some(order) = tables.orders.iter_mut().find(|o| o.id == id) {
            order.status_id = status_id;
        }
        Ok(())
    }

    async fn list_by_customer(&self, customer_id: i32) -> AppResult<Vec<CustomerOrder>> {
        let tables = self.tables()?;
        let rows = tables
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .filter_map(|o| {
                let book = tables.books.iter().find(|b| b.id == o.book_id)?;
                let status = OrderStatus::from_id(o.status_id)?;
                Some(CustomerOrder {
                    order_id: o.id,
                    customer_id: o.customer_id,
                    book_id: o.book_id,
                    order_date: o.order_date,
                    quantity: o.quantity,
                    total: o.total,
                    status: status.name().to_string(),
                    address: o.address.clone(),
                    city: o.city.clone(),
                    state: o.state.clone(),
                    zip: o.zip.clone(),
                    phone_number: o.phone_number.clone(),
                    title: book.title.clone(),
                    writer: book.writer.clone(),
                    cover_image_url: book.cover_image_url.clone(),
                    price: book.price,
                    tags: book.tags.clone(),
                })
            })
            .collect();
        Ok(rows)
    }
}

impl LoginRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<LoginRecord>> {
        let tables = self.tables()?;
        let record = tables.users.iter().find(|u| u.email == email).map(|user| {
            let customer = tables.customers.iter().find(|c| c.user_id == user.id);
            LoginRecord {
                id: user.id,
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                role: user.role.clone(),
                customer_name: customer.map(|c| c.name.clone()),
                points: customer.map(|c| c.points),
            }
        });
        Ok(record)
    }
}
