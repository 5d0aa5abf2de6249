use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, LockType};

use crate::{
    db::{DbPool, OrmConn},
    dto::books::AddBookRequest,
    entity::{
        customers::{Column as CustomerCol, Entity as Customers},
        orders::{
            ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
        },
    },
    error::{AppError, AppResult},
    models::{Book, Customer, CustomerOrder, LoginRecord, Order, OrderStatus},
};

use super::{
    BookRepository, CustomerRepository, LoginRepository, NewCustomer, NewOrder, OrderRepository,
};

const BOOK_COLUMNS: &str = "id, title, writer, cover_image_url, price, tags";

#[derive(Clone)]
pub struct PgBookRepository {
    pool: DbPool,
}

impl PgBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for PgBookRepository {
    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(books)
    }

    async fn count(&self) -> AppResult<i64> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.0)
    }

    async fn insert(&self, book: AddBookRequest) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, writer, cover_image_url, price, tags) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {BOOK_COLUMNS}"
        ))
        .bind(book.title)
        .bind(book.writer)
        .bind(book.cover_image_url)
        .bind(book.price)
        .bind(book.tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }
}

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: DbPool,
}

impl PgCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for PgCustomerRepository {
    async fn list_all(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, user_id, name, points FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exist: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(exist.is_some())
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let (user_id,): (i32,) = sqlx::query_as(
            "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(customer.email.as_str())
        .bind(customer.password_hash.as_str())
        .bind(customer.role.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(email_conflict)?;

        let created = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (user_id, name, points) VALUES ($1, $2, $3) \
             RETURNING id, user_id, name, points",
        )
        .bind(user_id)
        .bind(customer.name.as_str())
        .bind(customer.points)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let exist: Option<(i32,)> = sqlx::query_as("SELECT id FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(exist.is_some())
    }

    async fn deduct_points(&self, id: i32, amount: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE customers SET points = points - $1 WHERE id = $2")
            .bind(amount)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn email_conflict(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::EmailTaken,
        _ => AppError::DbError(err),
    }
}

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: DbPool,
    orm: OrmConn,
}

impl PgOrderRepository {
    pub fn new(pool: DbPool, orm: OrmConn) -> Self {
        Self { pool, orm }
    }
}

impl OrderRepository for PgOrderRepository {
    async fn list_all(&self) -> AppResult<Vec<Order>> {
        let orders = Orders::find()
            .order_by_asc(OrderCol::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(order_from_entity)
            .collect();
        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let order = Orders::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(order_from_entity);
        Ok(order)
    }

    async fn customer_points(&self, customer_id: i32) -> AppResult<Option<i64>> {
        let points: Option<(i64,)> = sqlx::query_as("SELECT points FROM customers WHERE id = $1")
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(points.map(|p| p.0))
    }

    async fn place(&self, order: NewOrder, points: i64) -> AppResult<Vec<Order>> {
        let txn = self.orm.begin().await?;

        let customer = Customers::find_by_id(order.customer_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?;
        let customer = match customer {
            Some(c) => c,
            None => return Err(AppError::not_found("Customer not found")),
        };
        if customer.points < points {
            return Err(AppError::InsufficientPoints);
        }

        Customers::update_many()
            .col_expr(CustomerCol::Points, Expr::col(CustomerCol::Points).sub(points))
            .filter(CustomerCol::Id.eq(order.customer_id))
            .exec(&txn)
            .await?;

        let mut created = Vec::with_capacity(order.book_ids.len());
        for book_id in &order.book_ids {
            let row = OrderActive {
                id: NotSet,
                customer_id: Set(order.customer_id),
                book_id: Set(*book_id),
                order_date: NotSet,
                quantity: Set(order.quantity),
                total: Set(order.total),
                status_id: Set(OrderStatus::Placed.id()),
                address: Set(order.shipping.address.clone()),
                city: Set(order.shipping.city.clone()),
                state: Set(order.shipping.state.clone()),
                zip: Set(order.shipping.zip.clone()),
                phone_number: Set(order.shipping.phone_number.clone()),
            }
            .insert(&txn)
            .await?;
            created.push(order_from_entity(row));
        }

        txn.commit().await?;
        Ok(created)
    }

    async fn set_status(&self, id: i32, status_id: i32) -> AppResult<()> {
        Orders::update_many()
            .col_expr(OrderCol::StatusId, Expr::value(status_id))
            .filter(OrderCol::Id.eq(id))
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn list_by_customer(&self, customer_id: i32) -> AppResult<Vec<CustomerOrder>> {
        let rows = sqlx::query_as::<_, CustomerOrder>(
            r#"
            SELECT o.id AS order_id, o.customer_id, o.book_id, o.order_date, o.quantity,
                   o.total, s.name AS status, o.address, o.city, o.state, o.zip,
                   o.phone_number, b.title, b.writer, b.cover_image_url, b.price, b.tags
            FROM orders o
            JOIN books b ON o.book_id = b.id
            JOIN statuses s ON o.status_id = s.id
            WHERE o.customer_id = $1
            ORDER BY o.id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct PgLoginRepository {
    pool: DbPool,
}

impl PgLoginRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl LoginRepository for PgLoginRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<LoginRecord>> {
        let record = sqlx::query_as::<_, LoginRecord>(
            r#"
            SELECT u.id, u.email, u.password_hash, u.role,
                   c.name AS customer_name, c.points
            FROM users u
            LEFT JOIN customers c ON u.id = c.user_id
            WHERE u.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_id: model.customer_id,
        book_id: model.book_id,
        order_date: model.order_date.with_timezone(&Utc),
        quantity: model.quantity,
        total: model.total,
        status_id: model.status_id,
        address: model.address,
        city: model.city,
        state: model.state,
        zip: model.zip,
        phone_number: model.phone_number,
    }
}
