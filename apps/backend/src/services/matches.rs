//! Match scheduling and roster management.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::adapters::matches_sea::{MatchCreate, MatchUpdateStatus};
use crate::entities::matches::{MatchFormat, MatchStatus};
use crate::entities::tournaments::TournamentStatus;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind};
use crate::repos::matches::Match;
use crate::repos::{matches, participants, throws, tournaments};

/// Standard darts: two players at the oche.
const MAX_PARTICIPANTS: u64 = 2;

/// A match plus the counts the listing endpoints report.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOverview {
    pub match_: Match,
    pub participants_count: u64,
    pub throws_count: u64,
}

async fn overview(txn: &DatabaseTransaction, m: Match) -> Result<MatchOverview, AppError> {
    let participants_count = participants::count_by_match(txn, m.id).await?;
    let throws_count = throws::count_by_match(txn, m.id).await?;
    Ok(MatchOverview {
        match_: m,
        participants_count,
        throws_count,
    })
}

pub async fn list_tournament_matches(
    txn: &DatabaseTransaction,
    tournament_id: i64,
) -> Result<Vec<MatchOverview>, AppError> {
    tournaments::require_tournament(txn, tournament_id).await?;

    let all = matches::find_all_by_tournament(txn, tournament_id).await?;
    let mut out = Vec::with_capacity(all.len());
    for m in all {
        out.push(overview(txn, m).await?);
    }
    Ok(out)
}

pub async fn get_match(
    txn: &DatabaseTransaction,
    match_id: i64,
) -> Result<MatchOverview, AppError> {
    let m = matches::require_match(txn, match_id).await?;
    overview(txn, m).await
}

/// Create a match in a tournament; only the tournament admin may do so.
/// The match format defaults to the tournament's configured format.
pub async fn create_match(
    txn: &DatabaseTransaction,
    tournament_id: i64,
    match_format: Option<MatchFormat>,
    caller_id: i64,
) -> Result<MatchOverview, AppError> {
    let tournament = tournaments::require_tournament(txn, tournament_id).await?;

    if !tournament.is_admin(caller_id) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotTournamentAdmin,
            "Only tournament admin can create matches",
        )
        .into());
    }
    if tournament.status == TournamentStatus::Completed {
        return Err(DomainError::conflict(
            ConflictKind::TournamentCompleted,
            "Cannot create matches for completed tournament",
        )
        .into());
    }

    let m = matches::create_match(
        txn,
        MatchCreate {
            tournament_id,
            group_id: None,
            match_format: match_format.unwrap_or(tournament.match_format),
        },
    )
    .await?;

    info!(match_id = m.id, tournament_id, "Match created");

    overview(txn, m).await
}

/// Admin-driven status transition (scheduling concerns, not scoring: the
/// finishing-throw transition lives in the scoring service).
pub async fn update_match_status(
    txn: &DatabaseTransaction,
    match_id: i64,
    new_status: MatchStatus,
    caller_id: i64,
) -> Result<MatchOverview, AppError> {
    let m = matches::require_match(txn, match_id).await?;
    let tournament = tournaments::require_tournament(txn, m.tournament_id).await?;
    if !tournament.is_admin(caller_id) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotTournamentAdmin,
            "Only tournament admin can update match status",
        )
        .into());
    }

    let mut dto = MatchUpdateStatus::new(match_id, new_status.clone(), m.version);
    if new_status == MatchStatus::Live {
        dto = dto.with_actual_start();
    } else if new_status == MatchStatus::Completed {
        dto = dto.with_actual_end();
    }

    let updated = matches::update_status(txn, dto).await?;

    info!(match_id, status = ?updated.status, "Match status updated");

    overview(txn, updated).await
}

/// Add a player to the roster. Only while the match is still scheduled, no
/// duplicates, capacity two.
pub async fn add_participant(
    txn: &DatabaseTransaction,
    match_id: i64,
    user_id: i64,
) -> Result<MatchOverview, AppError> {
    let m = matches::require_match(txn, match_id).await?;

    if m.status != MatchStatus::Scheduled {
        return Err(DomainError::conflict(
            ConflictKind::MatchNotScheduled,
            "Can only add participants to scheduled matches",
        )
        .into());
    }

    if participants::find_by_match_and_user(txn, match_id, user_id)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyParticipant,
            "User is already a participant",
        )
        .into());
    }

    if participants::count_by_match(txn, match_id).await? >= MAX_PARTICIPANTS {
        return Err(DomainError::conflict(ConflictKind::MatchFull, "Match is full").into());
    }

    participants::create_participant(txn, match_id, user_id).await?;

    info!(match_id, user_id, "Participant added");

    let m = matches::require_match(txn, match_id).await?;
    overview(txn, m).await
}

/// Delete a match; tournament admin only, and only while scheduled.
pub async fn delete_match(
    txn: &DatabaseTransaction,
    match_id: i64,
    caller_id: i64,
) -> Result<(), AppError> {
    let m = matches::require_match(txn, match_id).await?;
    let tournament = tournaments::require_tournament(txn, m.tournament_id).await?;
    if !tournament.is_admin(caller_id) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotTournamentAdmin,
            "Only tournament admin can delete matches",
        )
        .into());
    }
    if m.status != MatchStatus::Scheduled {
        return Err(DomainError::conflict(
            ConflictKind::MatchNotScheduled,
            "Can only delete scheduled matches",
        )
        .into());
    }

    matches::delete_match(txn, match_id).await?;

    info!(match_id, caller_id, "Match deleted");

    Ok(())
}
