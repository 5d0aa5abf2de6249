use crate::{
    dto::orders::PlaceOrderRequest,
    error::{AppError, AppResult},
    models::{CustomerOrder, Order, OrderStatus},
    repositories::{NewOrder, OrderRepository},
};

pub async fn list_orders<R: OrderRepository>(repo: &R) -> AppResult<Vec<Order>> {
    repo.list_all().await
}

pub async fn get_order<R: OrderRepository>(repo: &R, id: i32) -> AppResult<Order> {
    match repo.find_by_id(id).await? {
        Some(order) => Ok(order),
        None => Err(AppError::not_found("Order not found")),
    }
}

/// Points an order costs: the order total multiplied by the quantity.
pub fn points_required(quantity: i32, total: i64) -> AppResult<i64> {
    i64::from(quantity)
        .checked_mul(total)
        .ok_or_else(|| AppError::bad_request("order total is too large"))
}

/// Check the balance, then deduct the points and write one row per line item.
///
/// The repository repeats the balance check under a row lock inside its
/// transaction, so two concurrent orders cannot overdraw the same customer.
pub async fn place_order<R: OrderRepository>(
    repo: &R,
    payload: PlaceOrderRequest,
) -> AppResult<Vec<Order>> {
    let PlaceOrderRequest {
        customer_id,
        line_items,
        quantity,
        total,
        shipping_info,
    } = payload;

    if line_items.is_empty() {
        return Err(AppError::bad_request("order must contain at least one book"));
    }
    if quantity <= 0 {
        return Err(AppError::bad_request("quantity must be greater than 0"));
    }
    if total < 0 {
        return Err(AppError::bad_request("total must not be negative"));
    }

    let balance = match repo.customer_points(customer_id).await? {
        Some(points) => points,
        None => return Err(AppError::not_found("Customer not found")),
    };
    let points = points_required(quantity, total)?;
    if balance < points {
        tracing::info!(
            customer_id,
            balance,
            required = points,
            "order rejected: insufficient points"
        );
        return Err(AppError::InsufficientPoints);
    }

    let order = NewOrder {
        customer_id,
        book_ids: line_items.iter().map(|item| item.book_id).collect(),
        quantity,
        total,
        shipping: shipping_info,
    };
    let created = repo.place(order, points).await?;

    tracing::info!(customer_id, points, rows = created.len(), "order placed");
    Ok(created)
}

/// Mark an order cancelled. Points spent on it are not refunded.
pub async fn cancel_order<R: OrderRepository>(repo: &R, id: i32) -> AppResult<()> {
    if repo.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Order not found"));
    }
    repo.set_status(id, OrderStatus::Cancelled.id()).await?;
    tracing::info!(order_id = id, "order cancelled");
    Ok(())
}

pub async fn orders_by_customer<R: OrderRepository>(
    repo: &R,
    customer_id: i32,
) -> AppResult<Vec<CustomerOrder>> {
    repo.list_by_customer(customer_id).await
}
