/// Input for persisting an accepted throw. Round/throw numbering and the
/// remaining score are computed by the scoring service, never by callers.
#[derive(Debug, Clone)]
pub struct ThrowCreate {
    pub match_id: i64,
    pub user_id: i64,
    pub round_number: i32,
    pub throw_number: i32,
    pub points: i32,
    pub remaining_score: i32,
    pub is_double: bool,
}
