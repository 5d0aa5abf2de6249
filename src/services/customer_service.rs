use crate::{
    dto::customers::RegisterRequest,
    error::{AppError, AppResult},
    models::{CUSTOMER_ROLE, Customer, CustomerOrder, INITIAL_POINTS},
    repositories::{CustomerRepository, NewCustomer, OrderRepository},
    services::{login_service::hash_password, order_service},
};

pub async fn list_customers<R: CustomerRepository>(repo: &R) -> AppResult<Vec<Customer>> {
    repo.list_all().await
}

/// Create a user and its customer profile with the starting points balance.
///
/// The existence check is an early exit only; the unique index on
/// `users.email` is what rejects a concurrent duplicate.
pub async fn register<R: CustomerRepository>(
    repo: &R,
    payload: RegisterRequest,
) -> AppResult<Customer> {
    let RegisterRequest { name, email, password } = payload;
    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::bad_request("email and password are required"));
    }

    if repo.email_exists(&email).await? {
        return Err(AppError::EmailTaken);
    }

    let customer = repo
        .create(NewCustomer {
            name,
            email,
            password_hash: hash_password(&password)?,
            role: CUSTOMER_ROLE.to_string(),
            points: INITIAL_POINTS,
        })
        .await?;

    tracing::info!(customer_id = customer.id, user_id = customer.user_id, "customer registered");
    Ok(customer)
}

pub async fn customer_exists<R: CustomerRepository>(repo: &R, id: i32) -> AppResult<bool> {
    repo.exists(id).await
}

/// Subtract `amount` from the balance. A negative amount is rejected so the
/// balance can only go down here.
pub async fn deduct_points<R: CustomerRepository>(
    repo: &R,
    id: i32,
    amount: i64,
) -> AppResult<()> {
    if amount < 0 {
        return Err(AppError::bad_request("amount must not be negative"));
    }
    if !repo.deduct_points(id, amount).await? {
        return Err(AppError::not_found("Customer not found"));
    }
    Ok(())
}

/// Orders of one customer joined with their books, or not-found when the
/// customer does not exist.
pub async fn orders_for_customer<C, O>(
    customers: &C,
    orders: &O,
    customer_id: i32,
) -> AppResult<Vec<CustomerOrder>>
where
    C: CustomerRepository,
    O: OrderRepository,
{
    if !customers.exists(customer_id).await? {
        return Err(AppError::not_found("Customer not found"));
    }
    order_service::orders_by_customer(orders, customer_id).await
}
