/// Input for adding a user to a match roster.
#[derive(Debug, Clone)]
pub struct ParticipantCreate {
    pub match_id: i64,
    pub user_id: i64,
}

/// Finishing fields, written by a checkout and cleared by its undo.
#[derive(Debug, Clone)]
pub struct ParticipantFinish {
    pub finishing_score: Option<i32>,
    pub placement: Option<i32>,
}

impl ParticipantFinish {
    /// The winner's fields: finishing score 0, 1st place.
    pub fn winner() -> Self {
        Self {
            finishing_score: Some(0),
            placement: Some(1),
        }
    }

    /// Cleared fields, for undoing a finishing throw.
    pub fn cleared() -> Self {
        Self {
            finishing_score: None,
            placement: None,
        }
    }
}
