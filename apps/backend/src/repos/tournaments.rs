//! Tournament repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::tournaments_sea as tournaments_adapter;
use crate::entities::matches::MatchFormat;
use crate::entities::tournaments;
use crate::entities::tournaments::{TournamentFormat, TournamentStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Tournament domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub format: TournamentFormat,
    pub match_format: MatchFormat,
    pub start_date: time::OffsetDateTime,
    pub end_date: Option<time::OffsetDateTime>,
    pub registration_deadline: Option<time::OffsetDateTime>,
    pub max_players: i32,
    pub number_of_groups: i32,
    pub admin_id: i64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Tournament {
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_id == user_id
    }
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Tournament>, DomainError> {
    let all = tournaments_adapter::find_all(conn).await?;
    Ok(all.into_iter().map(Tournament::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<Tournament>, DomainError> {
    let t = tournaments_adapter::find_by_id(conn, tournament_id).await?;
    Ok(t.map(Tournament::from))
}

pub async fn require_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Tournament, DomainError> {
    find_by_id(conn, tournament_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Tournament,
            format!("Tournament {tournament_id} not found"),
        )
    })
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: tournaments_adapter::TournamentCreate,
) -> Result<Tournament, DomainError> {
    let t = tournaments_adapter::create_tournament(conn, dto).await?;
    Ok(Tournament::from(t))
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: tournaments_adapter::TournamentUpdate,
) -> Result<Tournament, DomainError> {
    let existing = tournaments_adapter::find_by_id(conn, tournament_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Tournament,
                format!("Tournament {tournament_id} not found"),
            )
        })?;
    let t = tournaments_adapter::update_tournament(conn, existing, dto).await?;
    Ok(Tournament::from(t))
}

pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<(), DomainError> {
    let deleted = tournaments_adapter::delete_by_id(conn, tournament_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Tournament,
            format!("Tournament {tournament_id} not found"),
        ));
    }
    Ok(())
}

impl From<tournaments::Model> for Tournament {
    fn from(model: tournaments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: model.status,
            format: model.format,
            match_format: model.match_format,
            start_date: model.start_date,
            end_date: model.end_date,
            registration_deadline: model.registration_deadline,
            max_players: model.max_players,
            number_of_groups: model.number_of_groups,
            admin_id: model.admin_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
