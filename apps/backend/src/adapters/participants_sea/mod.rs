//! SeaORM adapter for the match_participants table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::match_participants;

pub mod dto;

pub use dto::{ParticipantCreate, ParticipantFinish};

/// A match's roster in join order.
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<match_participants::Model>, sea_orm::DbErr> {
    match_participants::Entity::find()
        .filter(match_participants::Column::MatchId.eq(match_id))
        .order_by(match_participants::Column::CreatedAt, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_by_match_and_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    user_id: i64,
) -> Result<Option<match_participants::Model>, sea_orm::DbErr> {
    match_participants::Entity::find()
        .filter(match_participants::Column::MatchId.eq(match_id))
        .filter(match_participants::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    match_participants::Entity::find()
        .filter(match_participants::Column::MatchId.eq(match_id))
        .count(conn)
        .await
}

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ParticipantCreate,
) -> Result<match_participants::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let participant = match_participants::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        user_id: Set(dto.user_id),
        finishing_score: NotSet,
        placement: NotSet,
        is_confirmed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    participant.insert(conn).await
}

/// Write or clear the finishing fields on a roster row.
pub async fn update_finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    participant: match_participants::Model,
    dto: ParticipantFinish,
) -> Result<match_participants::Model, sea_orm::DbErr> {
    let mut active: match_participants::ActiveModel = participant.into();
    active.finishing_score = Set(dto.finishing_score);
    active.placement = Set(dto.placement);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}
