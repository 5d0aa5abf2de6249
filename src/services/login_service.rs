use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    repositories::LoginRepository,
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Returns `None` for an unknown email and for a wrong password alike.
pub async fn login<R: LoginRepository>(
    repo: &R,
    payload: LoginRequest,
) -> AppResult<Option<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let user = match repo.find_by_email(email.trim()).await? {
        Some(u) => u,
        None => {
            tracing::debug!("login rejected");
            return Ok(None);
        }
    };

    if !verify_password(&password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "login rejected");
        return Ok(None);
    }

    tracing::info!(user_id = user.id, "user logged in");
    Ok(Some(LoginResponse {
        user_id: user.id,
        role: user.role,
        points: user.points,
        name: user.customer_name,
        last_login: Utc::now(),
    }))
}
