// Integration tests for registration and login.

mod support;

use backend::db::txn::with_txn;
use backend::entities::users;
use backend::services::users::{login_user, register_user, RegisterInput};
use backend::{AppError, ErrorCode};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::support::build_test_state;

fn register_input(tag: &str) -> RegisterInput {
    RegisterInput {
        username: format!("erik_{tag}"),
        email: format!("erik_{tag}@example.com"),
        password: "very-secret-1".to_string(),
        full_name: "Erik Larsen".to_string(),
    }
}

#[tokio::test]
async fn test_register_then_login_roundtrip() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = register_user(txn, register_input("roundtrip")).await?;
            assert_eq!(user.username, "erik_roundtrip");
            assert!(user.is_active);
            // Hash never stores the plaintext
            assert_ne!(user.password_hash, "very-secret-1");

            let logged_in = login_user(txn, "erik_roundtrip", "very-secret-1").await?;
            assert_eq!(logged_in.id, user.id);
            assert!(logged_in.last_login.is_none(), "stamp happens after load");

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_weak_input() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            register_user(txn, register_input("dup")).await?;

            // Same username
            let result = register_user(txn, register_input("dup")).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::UniqueUser);

            // Same email, different username
            let mut input = register_input("dup");
            input.username = "someone_else".to_string();
            let result = register_user(txn, input).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::UniqueUser);

            // Short password
            let mut input = register_input("weak");
            input.password = "short".to_string();
            let result = register_user(txn, input).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::ValidationError);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            register_user(txn, register_input("badlogin")).await?;

            let wrong_password = login_user(txn, "erik_badlogin", "not-the-password")
                .await
                .unwrap_err();
            let unknown_user = login_user(txn, "nobody_here", "very-secret-1")
                .await
                .unwrap_err();

            assert_eq!(wrong_password.code(), ErrorCode::Unauthorized);
            assert_eq!(unknown_user.code(), ErrorCode::Unauthorized);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_login_rejects_inactive_accounts() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = register_user(txn, register_input("inactive")).await?;

            let model = users::Entity::find_by_id(user.id)
                .one(txn)
                .await
                .map_err(AppError::from)?
                .expect("user row");
            let mut active: users::ActiveModel = model.into();
            active.is_active = Set(false);
            active.update(txn).await.map_err(AppError::from)?;

            let result = login_user(txn, "erik_inactive", "very-secret-1").await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::AccountInactive);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
