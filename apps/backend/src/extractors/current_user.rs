use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::verify_access_token;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

/// The authenticated caller, resolved from the Bearer token to a live user
/// row. Handlers take this wherever an operation needs a caller identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let auth_str = auth_value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AppError::unauthorized_missing_bearer());
    }

    Ok(parts[1].to_string())
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let claims = verify_access_token(&token, &app_state.security)?;

            let user_id = claims
                .sub
                .parse::<i64>()
                .map_err(|_| AppError::unauthorized_invalid_jwt())?;

            // Look the user up so a deleted/deactivated account can't keep
            // using an unexpired token.
            let user = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                users::find_by_id(shared_txn.transaction(), user_id).await?
            } else {
                users::find_by_id(app_state.db(), user_id).await?
            };

            let user = user.ok_or_else(|| {
                AppError::forbidden(
                    crate::errors::ErrorCode::ForbiddenUserNotFound,
                    "User not found in database",
                )
            })?;

            if !user.is_active {
                return Err(AppError::forbidden(
                    crate::errors::ErrorCode::AccountInactive,
                    "User account is inactive",
                ));
            }

            Ok(CurrentUser {
                id: user.id,
                username: user.username,
            })
        })
    }
}
