//! SeaORM adapter for the dart_throws table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::dart_throws;

pub mod dto;

pub use dto::ThrowCreate;

/// The newest throw for a (match, player) pair. Ties on thrown_at break on id,
/// which is monotonic within a match.
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<Option<dart_throws::Model>, sea_orm::DbErr> {
    dart_throws::Entity::find()
        .filter(dart_throws::Column::MatchId.eq(match_id))
        .filter(dart_throws::Column::UserId.eq(user_id))
        .order_by(dart_throws::Column::ThrownAt, Order::Desc)
        .order_by(dart_throws::Column::Id, Order::Desc)
        .one(conn)
        .await
}

/// Every throw of the match, ordered by player, then round, then throw index.
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<dart_throws::Model>, sea_orm::DbErr> {
    dart_throws::Entity::find()
        .filter(dart_throws::Column::MatchId.eq(match_id))
        .order_by(dart_throws::Column::UserId, Order::Asc)
        .order_by(dart_throws::Column::RoundNumber, Order::Asc)
        .order_by(dart_throws::Column::ThrowNumber, Order::Asc)
        .all(conn)
        .await
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    dart_throws::Entity::find()
        .filter(dart_throws::Column::MatchId.eq(match_id))
        .count(conn)
        .await
}

pub async fn count_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    dart_throws::Entity::find()
        .filter(dart_throws::Column::MatchId.eq(match_id))
        .filter(dart_throws::Column::UserId.eq(user_id))
        .count(conn)
        .await
}

/// Number of distinct rounds a player has thrown in.
pub async fn count_rounds_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let rounds: Vec<i32> = dart_throws::Entity::find()
        .filter(dart_throws::Column::MatchId.eq(match_id))
        .filter(dart_throws::Column::UserId.eq(user_id))
        .select_only()
        .column(dart_throws::Column::RoundNumber)
        .distinct()
        .into_tuple()
        .all(conn)
        .await?;
    Ok(rounds.len() as u64)
}

pub async fn create_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ThrowCreate,
) -> Result<dart_throws::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let throw = dart_throws::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        user_id: Set(dto.user_id),
        round_number: Set(dto.round_number),
        throw_number: Set(dto.throw_number),
        points: Set(dto.points),
        remaining_score: Set(dto.remaining_score),
        is_double: Set(dto.is_double),
        thrown_at: Set(now),
    };

    throw.insert(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    throw_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = dart_throws::Entity::delete_by_id(throw_id).exec(conn).await?;
    Ok(result.rows_affected)
}
