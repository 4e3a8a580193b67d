use time::OffsetDateTime;

use crate::entities::matches::MatchFormat;
use crate::entities::tournaments::{TournamentFormat, TournamentStatus};

/// Input for creating a tournament.
#[derive(Debug, Clone)]
pub struct TournamentCreate {
    pub name: String,
    pub description: Option<String>,
    pub format: TournamentFormat,
    pub match_format: MatchFormat,
    pub start_date: OffsetDateTime,
    pub registration_deadline: Option<OffsetDateTime>,
    pub max_players: i32,
    pub number_of_groups: i32,
    pub admin_id: i64,
}

/// Partial update; None leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TournamentStatus>,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<Option<OffsetDateTime>>,
}
