//! SeaORM adapters. Everything here is generic over `ConnectionTrait` and
//! returns `sea_orm::DbErr`; the repos layer lifts results into the domain.

pub mod matches_sea;
pub mod participants_sea;
pub mod throws_sea;
pub mod tournaments_sea;
pub mod users_sea;
