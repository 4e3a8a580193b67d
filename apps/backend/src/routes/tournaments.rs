//! Tournament CRUD endpoints.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::db::txn::with_txn;
use crate::entities::matches::MatchFormat;
use crate::entities::tournaments::{TournamentFormat, TournamentStatus};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_user::CurrentUser;
use crate::repos::tournaments::Tournament;
use crate::services::tournaments as tournaments_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: Option<String>,
    pub format: Option<TournamentFormat>,
    pub match_format: Option<MatchFormat>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub registration_deadline: Option<OffsetDateTime>,
    pub max_players: Option<i32>,
    pub number_of_groups: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTournamentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TournamentStatus>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub format: TournamentFormat,
    pub match_format: MatchFormat,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    pub max_players: i32,
    pub number_of_groups: i32,
    pub admin_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            status: t.status,
            format: t.format,
            match_format: t.match_format,
            start_date: t.start_date,
            end_date: t.end_date,
            max_players: t.max_players,
            number_of_groups: t.number_of_groups,
            admin_id: t.admin_id,
            created_at: t.created_at,
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidTournamentId,
            format!("Invalid tournament id: {raw}"),
        )
    })
}

/// GET /api/tournaments
async fn list_tournaments(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournaments = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournaments_service::list_tournaments(txn).await })
    })
    .await?;

    let response: Vec<TournamentResponse> =
        tournaments.into_iter().map(TournamentResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/tournaments/{tournament_id}
async fn get_tournament(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;

    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournaments_service::get_tournament(txn, id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TournamentResponse::from(tournament)))
}

/// POST /api/tournaments
async fn create_tournament(
    http_req: HttpRequest,
    req: web::Json<CreateTournamentRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();
    let dto = TournamentCreate {
        name: req.name,
        description: req.description,
        format: req.format.unwrap_or(TournamentFormat::Group),
        match_format: req.match_format.unwrap_or(MatchFormat::FiveOhOne),
        start_date: req.start_date,
        registration_deadline: req.registration_deadline,
        max_players: req.max_players.unwrap_or(100),
        number_of_groups: req.number_of_groups.unwrap_or(1),
        admin_id: current_user.id,
    };

    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournaments_service::create_tournament(txn, dto).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(TournamentResponse::from(tournament)))
}

/// PUT /api/tournaments/{tournament_id}
async fn update_tournament(
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<UpdateTournamentRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let req = req.into_inner();
    let dto = TournamentUpdate {
        name: req.name,
        description: req.description.map(Some),
        status: req.status,
        start_date: req.start_date,
        end_date: req.end_date.map(Some),
    };
    let caller_id = current_user.id;

    let tournament = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(
            async move { tournaments_service::update_tournament(txn, id, dto, caller_id).await },
        )
    })
    .await?;

    Ok(HttpResponse::Ok().json(TournamentResponse::from(tournament)))
}

/// DELETE /api/tournaments/{tournament_id}
async fn delete_tournament(
    http_req: HttpRequest,
    path: web::Path<String>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let caller_id = current_user.id;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { tournaments_service::delete_tournament(txn, id, caller_id).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tournaments")
            .route(web::get().to(list_tournaments))
            .route(web::post().to(create_tournament)),
    );
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}")
            .route(web::get().to(get_tournament))
            .route(web::put().to(update_tournament))
            .route(web::delete().to(delete_tournament)),
    );
}
