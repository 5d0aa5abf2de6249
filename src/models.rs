use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Points granted to every newly registered customer.
pub const INITIAL_POINTS: i64 = 100;

pub const CUSTOMER_ROLE: &str = "customer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub writer: String,
    pub cover_image_url: String,
    pub price: i64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub points: i64,
}

/// One stored order row. An order for N books is persisted as N rows sharing
/// every field except `id` and `book_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub book_id: i32,
    pub order_date: DateTime<Utc>,
    pub quantity: i32,
    pub total: i64,
    pub status_id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone_number: String,
}

/// Order row joined with its book and the readable status name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub order_id: i32,
    pub customer_id: i32,
    pub book_id: i32,
    pub order_date: DateTime<Utc>,
    pub quantity: i32,
    pub total: i64,
    pub status: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone_number: String,
    pub title: String,
    pub writer: String,
    pub cover_image_url: String,
    pub price: i64,
    pub tags: Vec<String>,
}

/// User joined with its customer profile, as needed by login.
#[derive(Debug, Clone, FromRow)]
pub struct LoginRecord {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub customer_name: Option<String>,
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Placed,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    /// Primary key of the matching row in `statuses`.
    pub const fn id(self) -> i32 {
        match self {
            OrderStatus::Placed => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Cancelled => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }
}
