//! Match scheduling and roster endpoints.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::entities::matches::{MatchFormat, MatchStatus};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::match_id::MatchId;
use crate::services::matches as matches_service;
use crate::services::matches::MatchOverview;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub tournament_id: i64,
    pub match_format: Option<MatchFormat>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMatchStatusRequest {
    pub status: MatchStatus,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub status: MatchStatus,
    pub match_format: MatchFormat,
    pub participants_count: u64,
    pub throws_count: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<MatchOverview> for MatchResponse {
    fn from(o: MatchOverview) -> Self {
        Self {
            id: o.match_.id,
            tournament_id: o.match_.tournament_id,
            status: o.match_.status,
            match_format: o.match_.match_format,
            participants_count: o.participants_count,
            throws_count: o.throws_count,
            created_at: o.match_.created_at,
            updated_at: o.match_.updated_at,
        }
    }
}

/// GET /api/tournaments/{tournament_id}/matches
async fn list_tournament_matches(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let tournament_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidTournamentId,
            format!("Invalid tournament id: {raw}"),
        )
    })?;

    let matches = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { matches_service::list_tournament_matches(txn, tournament_id).await })
    })
    .await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/matches/{match_id}
async fn get_match(
    http_req: HttpRequest,
    match_id: MatchId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;

    let overview = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { matches_service::get_match(txn, id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MatchResponse::from(overview)))
}

/// POST /api/matches
async fn create_match(
    http_req: HttpRequest,
    req: web::Json<CreateMatchRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();
    let caller_id = current_user.id;

    let overview = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            matches_service::create_match(txn, req.tournament_id, req.match_format, caller_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(MatchResponse::from(overview)))
}

/// PUT /api/matches/{match_id}/status
async fn update_match_status(
    http_req: HttpRequest,
    match_id: MatchId,
    req: web::Json<UpdateMatchStatusRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;
    let status = req.into_inner().status;
    let caller_id = current_user.id;

    let overview = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            matches_service::update_match_status(txn, id, status, caller_id).await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MatchResponse::from(overview)))
}

/// POST /api/matches/{match_id}/participants
///
/// Adds the authenticated caller to the roster.
async fn add_participant(
    http_req: HttpRequest,
    match_id: MatchId,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;
    let user_id = current_user.id;

    let overview = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { matches_service::add_participant(txn, id, user_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MatchResponse::from(overview)))
}

/// DELETE /api/matches/{match_id}
async fn delete_match(
    http_req: HttpRequest,
    match_id: MatchId,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = match_id.0;
    let caller_id = current_user.id;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { matches_service::delete_match(txn, id, caller_id).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}/matches")
            .route(web::get().to(list_tournament_matches)),
    );
    cfg.service(web::resource("/api/matches").route(web::post().to(create_match)));
    cfg.service(
        web::resource("/api/matches/{match_id}")
            .route(web::get().to(get_match))
            .route(web::delete().to(delete_match)),
    );
    cfg.service(
        web::resource("/api/matches/{match_id}/status").route(web::put().to(update_match_status)),
    );
    cfg.service(
        web::resource("/api/matches/{match_id}/participants")
            .route(web::post().to(add_participant)),
    );
}
