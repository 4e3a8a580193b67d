use crate::entities::matches::{MatchFormat, MatchStatus};

/// Input for creating a match.
#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub tournament_id: i64,
    pub group_id: Option<i64>,
    pub match_format: MatchFormat,
}

/// Status transition with optimistic version check.
#[derive(Debug, Clone)]
pub struct MatchUpdateStatus {
    pub id: i64,
    pub current_version: i32,
    pub status: MatchStatus,
    /// Stamp actual_start (entering Live).
    pub set_actual_start: bool,
    /// Stamp actual_end (entering Completed).
    pub set_actual_end: bool,
}

impl MatchUpdateStatus {
    pub fn new(id: i64, status: MatchStatus, current_version: i32) -> Self {
        Self {
            id,
            current_version,
            status,
            set_actual_start: false,
            set_actual_end: false,
        }
    }

    pub fn with_actual_start(mut self) -> Self {
        self.set_actual_start = true;
        self
    }

    pub fn with_actual_end(mut self) -> Self {
        self.set_actual_end = true;
        self
    }
}
