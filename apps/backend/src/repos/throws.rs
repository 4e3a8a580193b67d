//! Throw-log repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::throws_sea as throws_adapter;
use crate::entities::dart_throws;
use crate::errors::domain::DomainError;

/// A recorded dart throw.
#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub round_number: i32,
    pub throw_number: i32,
    pub points: i32,
    pub remaining_score: i32,
    pub is_double: bool,
    pub thrown_at: time::OffsetDateTime,
}

/// The newest throw for (match, player), if any.
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<Option<Throw>, DomainError> {
    let t = throws_adapter::find_latest(conn, match_id, user_id).await?;
    Ok(t.map(Throw::from))
}

pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<Throw>, DomainError> {
    let all = throws_adapter::find_all_by_match(conn, match_id).await?;
    Ok(all.into_iter().map(Throw::from).collect())
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    Ok(throws_adapter::count_by_match(conn, match_id).await?)
}

pub async fn count_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(throws_adapter::count_by_match_and_user(conn, match_id, user_id).await?)
}

pub async fn count_rounds_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(throws_adapter::count_rounds_by_match_and_user(conn, match_id, user_id).await?)
}

pub async fn create_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: throws_adapter::ThrowCreate,
) -> Result<Throw, DomainError> {
    let t = throws_adapter::create_throw(conn, dto).await?;
    Ok(Throw::from(t))
}

pub async fn delete_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    throw_id: i64,
) -> Result<(), DomainError> {
    throws_adapter::delete_by_id(conn, throw_id).await?;
    Ok(())
}

impl From<dart_throws::Model> for Throw {
    fn from(model: dart_throws::Model) -> Self {
        Self {
            id: model.id,
            match_id: model.match_id,
            user_id: model.user_id,
            round_number: model.round_number,
            throw_number: model.throw_number,
            points: model.points,
            remaining_score: model.remaining_score,
            is_double: model.is_double,
            thrown_at: model.thrown_at,
        }
    }
}
