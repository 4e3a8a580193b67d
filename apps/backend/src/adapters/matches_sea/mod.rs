//! SeaORM adapter for the matches table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::matches;

pub mod dto;

pub use dto::{MatchCreate, MatchUpdateStatus};

/// Helper: Apply optimistic update with version check, then refetch.
///
/// - Adds the version increment and updated_at to the update
/// - Filters by id and current version
/// - Checks rows_affected to distinguish NotFound vs OptimisticLock
/// - Refetches and returns the updated model
///
/// Every scoring mutation goes through this before reading the throw log, so
/// concurrent writers for the same match serialize on the version column.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_version: i32,
    configure_update: F,
) -> Result<matches::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<matches::Entity>) -> sea_orm::UpdateMany<matches::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(matches::Entity::update_many())
        .col_expr(matches::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            matches::Column::Version,
            Expr::col(matches::Column::Version).add(1),
        )
        .filter(matches::Column::Id.eq(id))
        .filter(matches::Column::Version.eq(current_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the match doesn't exist or the version doesn't match.
        let existing = matches::Entity::find_by_id(id).one(conn).await?;
        if let Some(existing) = existing {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                current_version, existing.version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        } else {
            return Err(sea_orm::DbErr::RecordNotFound("Match not found".to_string()));
        }
    }

    matches::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match not found".to_string()))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

/// Find match by ID or return RecordNotFound error.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match not found".to_string()))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    Ok(find_by_id(conn, match_id).await?.is_some())
}

/// A tournament's matches in creation order.
pub async fn find_all_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::TournamentId.eq(tournament_id))
        .order_by(matches::Column::CreatedAt, Order::Asc)
        .all(conn)
        .await
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let match_active = matches::ActiveModel {
        id: NotSet,
        tournament_id: Set(dto.tournament_id),
        group_id: Set(dto.group_id),
        match_format: Set(dto.match_format),
        status: Set(matches::MatchStatus::Scheduled),
        scheduled_start: NotSet,
        actual_start: NotSet,
        actual_end: NotSet,
        version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match_active.insert(conn).await
}

/// Transition status with an optimistic version check.
pub async fn update_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchUpdateStatus,
) -> Result<matches::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    optimistic_update_then_fetch(conn, dto.id, dto.current_version, |mut update| {
        update = update.col_expr(matches::Column::Status, Expr::val(dto.status).into());
        if dto.set_actual_start {
            update = update.col_expr(matches::Column::ActualStart, Expr::val(now).into());
        }
        if dto.set_actual_end {
            update = update.col_expr(matches::Column::ActualEnd, Expr::val(now).into());
        }
        update
    })
    .await
}

/// Bump the version without changing anything else.
///
/// This is the serialization point for throw submissions: the losing side of
/// a concurrent pair fails the version filter and gets an OPTIMISTIC_LOCK
/// payload instead of double-reading the same remaining score.
pub async fn bump_version<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    current_version: i32,
) -> Result<matches::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, match_id, current_version, |update| update).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = matches::Entity::delete_by_id(match_id).exec(conn).await?;
    Ok(result.rows_affected)
}
