//! Pure domain logic. No IO, no SeaORM types.

pub mod scoring;

pub use scoring::{apply_throw, round_position, RoundPosition, ScoreViolation, ThrowOutcome};
