use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Book;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBookRequest {
    pub title: String,
    pub writer: String,
    #[serde(default)]
    pub cover_image_url: String,
    pub price: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One page of the catalog plus the unpaged row count.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total_items: i64,
}
