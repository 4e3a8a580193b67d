//! SeaORM adapter for the tournaments table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryOrder, Set,
};

use crate::entities::tournaments;

pub mod dto;

pub use dto::{TournamentCreate, TournamentUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find_by_id(tournament_id).one(conn).await
}

/// All tournaments, newest first.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .order_by(tournaments::Column::CreatedAt, Order::Desc)
        .all(conn)
        .await
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let tournament = tournaments::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        status: Set(tournaments::TournamentStatus::Planning),
        format: Set(dto.format),
        match_format: Set(dto.match_format),
        start_date: Set(dto.start_date),
        end_date: NotSet,
        registration_deadline: Set(dto.registration_deadline),
        max_players: Set(dto.max_players),
        number_of_groups: Set(dto.number_of_groups),
        admin_id: Set(dto.admin_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    tournament.insert(conn).await
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament: tournaments::Model,
    dto: TournamentUpdate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let mut active: tournaments::ActiveModel = tournament.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }
    if let Some(status) = dto.status {
        active.status = Set(status);
    }
    if let Some(start_date) = dto.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = dto.end_date {
        active.end_date = Set(end_date);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = tournaments::Entity::delete_by_id(tournament_id)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
