//! Repository functions for the domain layer. Thin wrappers over the SeaORM
//! adapters that speak domain models and `DomainError`.

pub mod matches;
pub mod participants;
pub mod throws;
pub mod tournaments;
pub mod users;
