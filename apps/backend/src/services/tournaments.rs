//! Tournament metadata CRUD. Admin-only for mutations; no bracket or group
//! generation lives here.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};
use crate::repos::tournaments;
use crate::repos::tournaments::Tournament;

pub async fn list_tournaments(txn: &DatabaseTransaction) -> Result<Vec<Tournament>, AppError> {
    Ok(tournaments::find_all(txn).await?)
}

pub async fn get_tournament(
    txn: &DatabaseTransaction,
    tournament_id: i64,
) -> Result<Tournament, AppError> {
    Ok(tournaments::require_tournament(txn, tournament_id).await?)
}

/// Create a tournament; the caller becomes its admin.
pub async fn create_tournament(
    txn: &DatabaseTransaction,
    mut dto: TournamentCreate,
) -> Result<Tournament, AppError> {
    dto.name = dto.name.trim().to_string();

    if dto.name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("NAME".into()),
            "Tournament name is required",
        )
        .into());
    }
    if dto.max_players < 2 {
        return Err(DomainError::validation(
            ValidationKind::Other("MAX_PLAYERS".into()),
            "Tournament must have at least 2 players",
        )
        .into());
    }
    if dto.start_date < time::OffsetDateTime::now_utc() {
        return Err(DomainError::validation(
            ValidationKind::Other("START_DATE".into()),
            "Start date must be in the future",
        )
        .into());
    }

    let tournament = tournaments::create_tournament(txn, dto).await?;

    info!(
        tournament_id = tournament.id,
        admin_id = tournament.admin_id,
        "Tournament created"
    );

    Ok(tournament)
}

/// Update tournament metadata; only its admin may do so.
pub async fn update_tournament(
    txn: &DatabaseTransaction,
    tournament_id: i64,
    dto: TournamentUpdate,
    caller_id: i64,
) -> Result<Tournament, AppError> {
    let existing = tournaments::require_tournament(txn, tournament_id).await?;
    if !existing.is_admin(caller_id) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotTournamentAdmin,
            "Only the tournament admin can update the tournament",
        )
        .into());
    }

    if let Some(name) = &dto.name {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("NAME".into()),
                "Tournament name is required",
            )
            .into());
        }
    }

    let updated = tournaments::update_tournament(txn, tournament_id, dto).await?;

    info!(tournament_id, caller_id, "Tournament updated");

    Ok(updated)
}

/// Delete a tournament; only its admin may do so.
pub async fn delete_tournament(
    txn: &DatabaseTransaction,
    tournament_id: i64,
    caller_id: i64,
) -> Result<(), AppError> {
    let existing = tournaments::require_tournament(txn, tournament_id).await?;
    if !existing.is_admin(caller_id) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotTournamentAdmin,
            "Only the tournament admin can delete the tournament",
        )
        .into());
    }

    tournaments::delete_tournament(txn, tournament_id).await?;

    info!(tournament_id, caller_id, "Tournament deleted");

    Ok(())
}
