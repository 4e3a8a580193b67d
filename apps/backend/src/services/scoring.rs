//! Live dart scoring: record, read and retract throws for a match.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::adapters::matches_sea::MatchUpdateStatus;
use crate::adapters::participants_sea::ParticipantFinish;
use crate::adapters::throws_sea::ThrowCreate;
use crate::domain::scoring::{self, ScoreViolation};
use crate::entities::matches::MatchStatus;
use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, NotFoundKind, ValidationKind,
};
use crate::repos::throws::Throw;
use crate::repos::{matches, participants, throws};

/// Result of a recorded throw.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedThrow {
    pub throw: Throw,
    /// True when this throw checked the leg out.
    pub finished: bool,
}

impl RecordedThrow {
    pub fn message(&self) -> &'static str {
        if self.finished {
            "Match finished!"
        } else {
            "Dart recorded"
        }
    }
}

/// One participant's standing within a match.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScore {
    pub user_id: i64,
    pub current_score: i32,
    pub rounds_played: u64,
    pub darts_thrown: u64,
    pub finished: bool,
}

/// Scoreboard for a match: one entry per participant plus the match status.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub match_id: i64,
    pub status: MatchStatus,
    pub players: Vec<PlayerScore>,
}

/// Dart scoring service.
///
/// All mutations run inside the caller's transaction and serialize on the
/// match's version column: the compare-and-bump happens before the throw log
/// is read, so concurrent submissions cannot both act on the same remaining
/// score. The loser surfaces OPTIMISTIC_LOCK and retries.
pub struct DartScoreService;

impl DartScoreService {
    /// Validate and persist one throw for the calling participant.
    ///
    /// Validation order (each failure distinct): match exists, match live,
    /// caller is a participant, points in range, then the checkout rules.
    /// A finishing throw moves the match to AwaitingConfirmation and stamps
    /// the thrower's roster row as the winner.
    pub async fn record_throw(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
        user_id: i64,
        points: i32,
        is_double: bool,
    ) -> Result<RecordedThrow, AppError> {
        debug!(match_id, user_id, points, is_double, "Recording throw");

        let m = matches::require_match(txn, match_id).await?;

        if m.status != MatchStatus::Live {
            return Err(DomainError::conflict(
                ConflictKind::MatchNotLive,
                "Match is not in progress",
            )
            .into());
        }

        participants::find_by_match_and_user(txn, match_id, user_id)
            .await?
            .ok_or_else(|| {
                DomainError::forbidden(
                    ForbiddenKind::NotAParticipant,
                    "User is not a participant in this match",
                )
            })?;

        if !(0..=scoring::MAX_POINTS_PER_TURN).contains(&points) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPoints,
                "Invalid points (0-180)",
            )
            .into());
        }

        // Serialization point: claim the match version before reading the
        // throw log, so a concurrent submission cannot read the same
        // remaining score. Conflicts surface as OPTIMISTIC_LOCK.
        let m = matches::bump_version(txn, match_id, m.version).await?;

        let current_remaining = throws::find_latest(txn, match_id, user_id)
            .await?
            .map(|t| t.remaining_score)
            .unwrap_or_else(|| m.starting_score());

        let outcome =
            scoring::apply_throw(current_remaining, points, is_double).map_err(|v| match v {
                ScoreViolation::PointsOutOfRange => DomainError::validation(
                    ValidationKind::InvalidPoints,
                    "Invalid points (0-180)",
                ),
                ScoreViolation::Bust => DomainError::validation(
                    ValidationKind::Bust,
                    "Score would go below zero - bust",
                ),
                ScoreViolation::NoDoubleOnCheckout => DomainError::validation(
                    ValidationKind::MustFinishOnDouble,
                    "Must finish with a double",
                ),
            })?;

        let prior_throws = throws::count_by_match_and_user(txn, match_id, user_id).await?;
        let position = scoring::round_position(prior_throws);

        let throw = throws::create_throw(
            txn,
            ThrowCreate {
                match_id,
                user_id,
                round_number: position.round_number,
                throw_number: position.throw_number,
                points,
                remaining_score: outcome.remaining(),
                is_double,
            },
        )
        .await?;

        let finished = outcome.is_checkout();
        if finished {
            matches::update_status(
                txn,
                MatchUpdateStatus::new(match_id, MatchStatus::AwaitingConfirmation, m.version),
            )
            .await?;
            participants::update_finish(txn, match_id, user_id, ParticipantFinish::winner())
                .await?;
        }

        info!(
            match_id,
            user_id,
            points,
            remaining = outcome.remaining(),
            finished,
            "Throw recorded"
        );

        Ok(RecordedThrow { throw, finished })
    }

    /// Current scoreboard for every participant of the match.
    ///
    /// Pure read: valid in every match status, reporting the starting score
    /// for participants with no throws yet.
    pub async fn match_score(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
    ) -> Result<MatchScore, AppError> {
        let m = matches::require_match(txn, match_id).await?;
        let roster = participants::find_all_by_match(txn, match_id).await?;

        let mut players = Vec::with_capacity(roster.len());
        for participant in roster {
            let current_score = throws::find_latest(txn, match_id, participant.user_id)
                .await?
                .map(|t| t.remaining_score)
                .unwrap_or_else(|| m.starting_score());
            let rounds_played =
                throws::count_rounds_by_match_and_user(txn, match_id, participant.user_id).await?;
            let darts_thrown =
                throws::count_by_match_and_user(txn, match_id, participant.user_id).await?;

            players.push(PlayerScore {
                user_id: participant.user_id,
                current_score,
                rounds_played,
                darts_thrown,
                finished: current_score == 0,
            });
        }

        Ok(MatchScore {
            match_id,
            status: m.status,
            players,
        })
    }

    /// Every throw of the match, ordered by player, round, throw index.
    /// An empty list is a valid result for a match with no throws yet.
    pub async fn list_throws(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
    ) -> Result<Vec<Throw>, AppError> {
        Ok(throws::find_all_by_match(txn, match_id).await?)
    }

    /// Remove the caller's most recent throw.
    ///
    /// Only ever touches that single row. If the removed throw was the
    /// finishing one (match AwaitingConfirmation), the winner's roster fields
    /// are cleared and the match reverts to Live.
    pub async fn undo_last_throw(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
        user_id: i64,
    ) -> Result<(), AppError> {
        debug!(match_id, user_id, "Undoing last throw");

        let last_throw = throws::find_latest(txn, match_id, user_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Throw, "No darts to undo")
            })?;

        let m = matches::require_match(txn, match_id).await?;
        if m.status != MatchStatus::Live && m.status != MatchStatus::AwaitingConfirmation {
            return Err(DomainError::conflict(
                ConflictKind::UndoNotAllowed,
                "Cannot undo darts in this match state",
            )
            .into());
        }

        // Undo races against new submissions for the same match; claim the
        // version here as well.
        let m = matches::bump_version(txn, match_id, m.version).await?;

        throws::delete_throw(txn, last_throw.id).await?;

        // Undoing the finishing throw reopens the leg.
        if m.status == MatchStatus::AwaitingConfirmation {
            participants::update_finish(txn, match_id, user_id, ParticipantFinish::cleared())
                .await?;
            matches::update_status(
                txn,
                MatchUpdateStatus::new(match_id, MatchStatus::Live, m.version),
            )
            .await?;
        }

        info!(match_id, user_id, throw_id = last_throw.id, "Throw undone");

        Ok(())
    }
}
