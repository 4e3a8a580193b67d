pub mod dart_throws;
pub mod match_participants;
pub mod matches;
pub mod tournaments;
pub mod users;
