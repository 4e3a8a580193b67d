//! Match roster repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::participants_sea as participants_adapter;
use crate::entities::match_participants;
use crate::errors::domain::DomainError;

/// A player's membership in a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub finishing_score: Option<i32>,
    pub placement: Option<i32>,
    pub is_confirmed: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<Participant>, DomainError> {
    let all = participants_adapter::find_all_by_match(conn, match_id).await?;
    Ok(all.into_iter().map(Participant::from).collect())
}

pub async fn find_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<Option<Participant>, DomainError> {
    let p = participants_adapter::find_by_match_and_user(conn, match_id, user_id).await?;
    Ok(p.map(Participant::from))
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    Ok(participants_adapter::count_by_match(conn, match_id).await?)
}

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<Participant, DomainError> {
    let dto = participants_adapter::ParticipantCreate { match_id, user_id };
    let p = participants_adapter::create_participant(conn, dto).await?;
    Ok(Participant::from(p))
}

/// Write or clear finishing-score/placement on a roster row.
///
/// Loads the row again inside the caller's transaction so the update works
/// from current state rather than a stale copy.
pub async fn update_finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
    dto: participants_adapter::ParticipantFinish,
) -> Result<Option<Participant>, DomainError> {
    let existing = participants_adapter::find_by_match_and_user(conn, match_id, user_id).await?;
    match existing {
        Some(model) => {
            let updated = participants_adapter::update_finish(conn, model, dto).await?;
            Ok(Some(Participant::from(updated)))
        }
        None => Ok(None),
    }
}

impl From<match_participants::Model> for Participant {
    fn from(model: match_participants::Model) -> Self {
        Self {
            id: model.id,
            match_id: model.match_id,
            user_id: model.user_id,
            finishing_score: model.finishing_score,
            placement: model.placement,
            is_confirmed: model.is_confirmed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
