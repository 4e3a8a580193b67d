//! Match repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::matches_sea as matches_adapter;
use crate::entities::matches;
use crate::entities::matches::{MatchFormat, MatchStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Match domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub tournament_id: i64,
    pub group_id: Option<i64>,
    pub match_format: MatchFormat,
    pub status: MatchStatus,
    pub scheduled_start: Option<time::OffsetDateTime>,
    pub actual_start: Option<time::OffsetDateTime>,
    pub actual_end: Option<time::OffsetDateTime>,
    pub version: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Match {
    /// The countdown this match's participants start from.
    pub fn starting_score(&self) -> i32 {
        self.match_format.starting_score()
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    let m = matches_adapter::find_by_id(conn, match_id).await?;
    Ok(m.map(Match::from))
}

/// Find match by ID or fail with the domain's match-not-found.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    find_by_id(conn, match_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
    })
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<bool, DomainError> {
    Ok(matches_adapter::exists(conn, match_id).await?)
}

pub async fn find_all_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let all = matches_adapter::find_all_by_tournament(conn, tournament_id).await?;
    Ok(all.into_iter().map(Match::from).collect())
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: matches_adapter::MatchCreate,
) -> Result<Match, DomainError> {
    let m = matches_adapter::create_match(conn, dto).await?;
    Ok(Match::from(m))
}

/// Transition status under the match's optimistic version check.
pub async fn update_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: matches_adapter::MatchUpdateStatus,
) -> Result<Match, DomainError> {
    let m = matches_adapter::update_status(conn, dto).await?;
    Ok(Match::from(m))
}

/// Serialize a scoring mutation: compare-and-bump the match version.
pub async fn bump_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    current_version: i32,
) -> Result<Match, DomainError> {
    let m = matches_adapter::bump_version(conn, match_id, current_version).await?;
    Ok(Match::from(m))
}

pub async fn delete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<(), DomainError> {
    let deleted = matches_adapter::delete_by_id(conn, match_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Match,
            format!("Match {match_id} not found"),
        ));
    }
    Ok(())
}

impl From<matches::Model> for Match {
    fn from(model: matches::Model) -> Self {
        Self {
            id: model.id,
            tournament_id: model.tournament_id,
            group_id: model.group_id,
            match_format: model.match_format,
            status: model.status,
            scheduled_start: model.scheduled_start,
            actual_start: model.actual_start,
            actual_end: model.actual_end,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
