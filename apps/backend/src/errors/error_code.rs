//! Error codes for the darts backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the darts backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// User not found in database
    ForbiddenUserNotFound,
    /// Throwing player is not registered in the match
    NotAParticipant,
    /// Caller is not the tournament admin
    NotTournamentAdmin,
    /// Account has been deactivated
    AccountInactive,

    // Request Validation
    /// Invalid match ID provided
    InvalidMatchId,
    /// Invalid tournament ID provided
    InvalidTournamentId,
    /// Points outside the 0-180 range
    InvalidPoints,
    /// Throw would take the remaining score below zero
    Bust,
    /// A leg must be finished on a double segment
    MustFinishOnDouble,
    /// Unknown match status value
    InvalidMatchStatus,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Match not found
    MatchNotFound,
    /// Tournament not found
    TournamentNotFound,
    /// User not found
    UserNotFound,
    /// No darts recorded for this player in this match
    NoThrowsToUndo,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Match is not live, throws cannot be recorded
    MatchNotLive,
    /// Match status forbids undoing a throw
    UndoNotAllowed,
    /// Match already has the maximum number of participants
    MatchFull,
    /// User is already a participant of the match
    AlreadyParticipant,
    /// Operation requires the match to still be scheduled
    MatchNotScheduled,
    /// Tournament is completed; no further changes allowed
    TournamentCompleted,
    /// Username or email already taken
    UniqueUser,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::NotAParticipant => "NOT_A_PARTICIPANT",
            Self::NotTournamentAdmin => "NOT_TOURNAMENT_ADMIN",
            Self::AccountInactive => "ACCOUNT_INACTIVE",

            // Request Validation
            Self::InvalidMatchId => "INVALID_MATCH_ID",
            Self::InvalidTournamentId => "INVALID_TOURNAMENT_ID",
            Self::InvalidPoints => "INVALID_POINTS",
            Self::Bust => "BUST",
            Self::MustFinishOnDouble => "MUST_FINISH_ON_DOUBLE",
            Self::InvalidMatchStatus => "INVALID_MATCH_STATUS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NoThrowsToUndo => "NO_THROWS_TO_UNDO",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::MatchNotLive => "MATCH_NOT_LIVE",
            Self::UndoNotAllowed => "UNDO_NOT_ALLOWED",
            Self::MatchFull => "MATCH_FULL",
            Self::AlreadyParticipant => "ALREADY_PARTICIPANT",
            Self::MatchNotScheduled => "MATCH_NOT_SCHEDULED",
            Self::TournamentCompleted => "TOURNAMENT_COMPLETED",
            Self::UniqueUser => "UNIQUE_USER",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(ErrorCode::NotAParticipant.as_str(), "NOT_A_PARTICIPANT");
        assert_eq!(ErrorCode::InvalidPoints.as_str(), "INVALID_POINTS");
        assert_eq!(ErrorCode::Bust.as_str(), "BUST");
        assert_eq!(
            ErrorCode::MustFinishOnDouble.as_str(),
            "MUST_FINISH_ON_DOUBLE"
        );
        assert_eq!(ErrorCode::MatchNotFound.as_str(), "MATCH_NOT_FOUND");
        assert_eq!(ErrorCode::NoThrowsToUndo.as_str(), "NO_THROWS_TO_UNDO");
        assert_eq!(ErrorCode::MatchNotLive.as_str(), "MATCH_NOT_LIVE");
        assert_eq!(ErrorCode::UndoNotAllowed.as_str(), "UNDO_NOT_ALLOWED");
        assert_eq!(ErrorCode::OptimisticLock.as_str(), "OPTIMISTIC_LOCK");
        assert_eq!(ErrorCode::UniqueUser.as_str(), "UNIQUE_USER");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(format!("{}", ErrorCode::InvalidMatchId), "INVALID_MATCH_ID");
        assert_eq!(format!("{}", ErrorCode::MatchNotLive), "MATCH_NOT_LIVE");
    }
}
