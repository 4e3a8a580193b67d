//! Account registration and login.

use sea_orm::DatabaseTransaction;
use tracing::{info, warn};

use crate::adapters::users_sea::UserCreate;
use crate::auth::password;
use crate::entities::users::UserRole;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::users;
use crate::repos::users::User;

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Create an account with a bcrypt-hashed password. New accounts are players;
/// roles are changed out of band.
pub async fn register_user(
    txn: &DatabaseTransaction,
    input: RegisterInput,
) -> Result<User, AppError> {
    let username = input.username.trim().to_string();
    let email = input.email.trim().to_string();

    if username.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("USERNAME".into()),
            "Username cannot be empty",
        )
        .into());
    }
    if email.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EMAIL".into()),
            "Email cannot be empty",
        )
        .into());
    }
    if input.password.len() < 8 {
        return Err(DomainError::validation(
            ValidationKind::Other("PASSWORD".into()),
            "Password must be at least 8 characters",
        )
        .into());
    }

    if users::find_by_username_or_email(txn, &username, &email)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::UniqueUser,
            "Username or email already exists",
        )
        .into());
    }

    let password_hash = password::hash_password(&input.password)?;

    let user = users::create_user(
        txn,
        UserCreate {
            username: username.clone(),
            email,
            password_hash,
            full_name: input.full_name.trim().to_string(),
            role: UserRole::Player,
        },
    )
    .await?;

    info!(user_id = user.id, username = %username, "User registered");

    Ok(user)
}

/// Verify credentials and stamp last_login.
///
/// Unknown username and wrong password share one Unauthorized so the
/// response doesn't leak which half failed.
pub async fn login_user(
    txn: &DatabaseTransaction,
    username: &str,
    plain_password: &str,
) -> Result<User, AppError> {
    let user = users::find_by_username(txn, username).await?;

    let user = match user {
        Some(u) if password::verify_password(plain_password, &u.password_hash) => u,
        _ => {
            warn!(username = %username, "Failed login attempt");
            return Err(AppError::unauthorized());
        }
    };

    if !user.is_active {
        return Err(AppError::forbidden(
            ErrorCode::AccountInactive,
            "User account is inactive",
        ));
    }

    users::touch_last_login(txn, user.id).await?;

    info!(user_id = user.id, username = %username, "User logged in");

    Ok(user)
}
