use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::matches;
use crate::state::app_state::AppState;

/// Match ID extracted from the route path parameter.
/// Validates that the match exists in the database.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchId(pub i64);

impl FromRequest for MatchId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let match_id_str = req.match_info().get("match_id").ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidMatchId, "Missing match_id parameter")
            })?;

            let match_id = match_id_str.parse::<i64>().map_err(|_| {
                AppError::bad_request(
                    ErrorCode::InvalidMatchId,
                    format!("Invalid match id: {match_id_str}"),
                )
            })?;

            if match_id <= 0 {
                return Err(AppError::bad_request(
                    ErrorCode::InvalidMatchId,
                    format!("Match id must be positive, got: {match_id}"),
                ));
            }

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            // Use the shared transaction if a test injected one
            let exists = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                matches::exists(shared_txn.transaction(), match_id).await?
            } else {
                matches::exists(app_state.db(), match_id).await?
            };

            if !exists {
                return Err(AppError::not_found(
                    ErrorCode::MatchNotFound,
                    format!("Match {match_id} not found"),
                ));
            }

            Ok(MatchId(match_id))
        })
    }
}
