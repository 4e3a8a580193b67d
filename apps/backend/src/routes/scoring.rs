//! Live scoring endpoints: record, read and undo throws.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::entities::matches::MatchStatus;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::match_id::MatchId;
use crate::repos::throws::Throw;
use crate::services::scoring::{DartScoreService, MatchScore, PlayerScore};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordThrowRequest {
    pub points: i32,
    #[serde(default)]
    pub is_double: bool,
}

#[derive(Debug, Serialize)]
pub struct ThrowResponse {
    pub id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub points: i32,
    pub remaining_score: i32,
    pub is_double: bool,
    pub round_number: i32,
    pub throw_number: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub thrown_at: OffsetDateTime,
}

impl From<Throw> for ThrowResponse {
    fn from(t: Throw) -> Self {
        Self {
            id: t.id,
            match_id: t.match_id,
            user_id: t.user_id,
            points: t.points,
            remaining_score: t.remaining_score,
            is_double: t.is_double,
            round_number: t.round_number,
            throw_number: t.throw_number,
            thrown_at: t.thrown_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordThrowResponse {
    #[serde(rename = "throw")]
    pub throw_: ThrowResponse,
    pub finished: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerScoreResponse {
    pub user_id: i64,
    pub current_score: i32,
    pub rounds_played: u64,
    pub darts_thrown: u64,
    pub status: String,
}

impl From<PlayerScore> for PlayerScoreResponse {
    fn from(p: PlayerScore) -> Self {
        Self {
            user_id: p.user_id,
            current_score: p.current_score,
            rounds_played: p.rounds_played,
            darts_thrown: p.darts_thrown,
            status: if p.finished {
                "Finished".to_string()
            } else {
                "In Progress".to_string()
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchScoreResponse {
    pub match_id: i64,
    pub status: MatchStatus,
    pub player_scores: Vec<PlayerScoreResponse>,
}

impl From<MatchScore> for MatchScoreResponse {
    fn from(s: MatchScore) -> Self {
        Self {
            match_id: s.match_id,
            status: s.status,
            player_scores: s.players.into_iter().map(PlayerScoreResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UndoResponse {
    pub undone: bool,
    pub message: String,
}

/// POST /api/matches/{match_id}/throws
///
/// Records one dart for the authenticated caller, who must be a participant.
async fn record_throw(
    http_req: HttpRequest,
    match_id: MatchId,
    req: web::Json<RecordThrowRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;
    let user_id = current_user.id;
    let req = req.into_inner();

    let recorded = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = DartScoreService;
            service
                .record_throw(txn, id, user_id, req.points, req.is_double)
                .await
        })
    })
    .await?;

    let message = recorded.message().to_string();
    let response = RecordThrowResponse {
        throw_: ThrowResponse::from(recorded.throw),
        finished: recorded.finished,
        message,
    };
    Ok(HttpResponse::Created().json(response))
}

/// GET /api/matches/{match_id}/throws
async fn list_throws(
    http_req: HttpRequest,
    match_id: MatchId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;

    let throws = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = DartScoreService;
            service.list_throws(txn, id).await
        })
    })
    .await?;

    let response: Vec<ThrowResponse> = throws.into_iter().map(ThrowResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/matches/{match_id}/score
async fn get_match_score(
    http_req: HttpRequest,
    match_id: MatchId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;

    let score = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = DartScoreService;
            service.match_score(txn, id).await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MatchScoreResponse::from(score)))
}

/// DELETE /api/matches/{match_id}/throws/latest
///
/// Retracts the caller's most recent throw.
async fn undo_last_throw(
    http_req: HttpRequest,
    match_id: MatchId,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;
    let user_id = current_user.id;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = DartScoreService;
            service.undo_last_throw(txn, id, user_id).await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(UndoResponse {
        undone: true,
        message: "Dart undone successfully".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/matches/{match_id}/throws")
            .route(web::post().to(record_throw))
            .route(web::get().to(list_throws)),
    );
    cfg.service(
        web::resource("/api/matches/{match_id}/score").route(web::get().to(get_match_score)),
    );
    cfg.service(
        web::resource("/api/matches/{match_id}/throws/latest")
            .route(web::delete().to(undo_last_throw)),
    );
}
