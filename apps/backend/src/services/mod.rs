//! Service layer: orchestration over a database transaction. Services are
//! trust boundaries; they load their own validation data rather than trusting
//! caller-provided state.

pub mod matches;
pub mod scoring;
pub mod tournaments;
pub mod users;
