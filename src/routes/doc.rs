use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        books::{AddBookRequest, BookPage},
        customers::RegisterRequest,
        orders::{LineItem, PlaceOrderRequest, ShippingInfo},
    },
    models::{Book, Customer, CustomerOrder, Order, OrderStatus},
    response::{ApiResponse, ErrorResponse},
    routes::{books, customers, health, login, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        books::list_books,
        books::add_book,
        books::search_books,
        books::get_book,
        customers::list_customers,
        customers::register_customer,
        customers::customer_orders,
        orders::list_orders,
        orders::place_order,
        orders::get_order,
        orders::cancel_order,
        login::login
    ),
    components(
        schemas(
            Book,
            Customer,
            Order,
            CustomerOrder,
            OrderStatus,
            AddBookRequest,
            BookPage,
            RegisterRequest,
            PlaceOrderRequest,
            LineItem,
            ShippingInfo,
            LoginRequest,
            LoginResponse,
            params::Pagination,
            params::SearchQuery,
            health::HealthData,
            ErrorResponse,
            ApiResponse<Book>,
            ApiResponse<BookPage>,
            ApiResponse<Customer>,
            ApiResponse<Order>,
            ApiResponse<LoginResponse>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Books", description = "Book catalog"),
        (name = "Customers", description = "Customer registration and order history"),
        (name = "Orders", description = "Order placement and cancellation"),
        (name = "Authentication", description = "Login"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
