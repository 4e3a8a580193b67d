//! Shared helpers for integration tests.
//!
//! Each test gets its own in-memory SQLite database, migrated up front, so
//! suites run in parallel without interfering.
#![allow(dead_code)] // not every suite uses every helper

use backend::adapters::tournaments_sea::TournamentCreate;
use backend::adapters::users_sea::UserCreate;
use backend::entities::matches::{MatchFormat, MatchStatus};
use backend::entities::tournaments::TournamentFormat;
use backend::entities::users::UserRole;
use backend::repos::{matches, participants, tournaments, users};
use backend::services::matches as matches_service;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;
use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseTransaction};

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info,sqlx=warn,sea_orm=warn")
        .with_test_writer()
        .try_init();
}

/// Fresh app state over a migrated in-memory SQLite database.
///
/// max_connections is pinned to 1 so every query sees the same in-memory
/// database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("sqlite connect failed: {e}")))?;

    migration::migrate(&db, MigrationCommand::Up)
        .await
        .map_err(AppError::from)?;

    Ok(AppState::new(db, SecurityConfig::default()))
}

/// Ids of everything a scoring test needs.
pub struct MatchSetup {
    pub tournament_id: i64,
    pub match_id: i64,
    pub admin_id: i64,
    pub player_one: i64,
    pub player_two: i64,
}

pub async fn create_test_user(
    txn: &DatabaseTransaction,
    tag: &str,
    name: &str,
) -> Result<i64, AppError> {
    let user = users::create_user(
        txn,
        UserCreate {
            username: format!("{name}_{tag}"),
            email: format!("{name}_{tag}@example.com"),
            password_hash: "x".repeat(60),
            full_name: format!("{name} {tag}"),
            role: UserRole::Player,
        },
    )
    .await?;
    Ok(user.id)
}

pub async fn create_test_tournament(
    txn: &DatabaseTransaction,
    tag: &str,
    admin_id: i64,
    match_format: MatchFormat,
) -> Result<i64, AppError> {
    let tournament = tournaments::create_tournament(
        txn,
        TournamentCreate {
            name: format!("Tournament {tag}"),
            description: None,
            format: TournamentFormat::Group,
            match_format,
            start_date: time::OffsetDateTime::now_utc() + time::Duration::days(7),
            registration_deadline: None,
            max_players: 16,
            number_of_groups: 1,
            admin_id,
        },
    )
    .await?;
    Ok(tournament.id)
}

/// A scheduled match with two rostered players.
pub async fn setup_scheduled_match(
    txn: &DatabaseTransaction,
    tag: &str,
    match_format: MatchFormat,
) -> Result<MatchSetup, AppError> {
    let admin_id = create_test_user(txn, tag, "admin").await?;
    let player_one = create_test_user(txn, tag, "alice").await?;
    let player_two = create_test_user(txn, tag, "bob").await?;

    let tournament_id = create_test_tournament(txn, tag, admin_id, match_format).await?;

    let overview = matches_service::create_match(txn, tournament_id, None, admin_id).await?;
    let match_id = overview.match_.id;

    matches_service::add_participant(txn, match_id, player_one).await?;
    matches_service::add_participant(txn, match_id, player_two).await?;

    Ok(MatchSetup {
        tournament_id,
        match_id,
        admin_id,
        player_one,
        player_two,
    })
}

/// A live match with two rostered players, ready for throws.
pub async fn setup_live_match(
    txn: &DatabaseTransaction,
    tag: &str,
    match_format: MatchFormat,
) -> Result<MatchSetup, AppError> {
    let setup = setup_scheduled_match(txn, tag, match_format).await?;
    matches_service::update_match_status(txn, setup.match_id, MatchStatus::Live, setup.admin_id)
        .await?;
    Ok(setup)
}

/// Current roster row for a player; panics if missing (tests seed it).
pub async fn participant_row(
    txn: &DatabaseTransaction,
    match_id: i64,
    user_id: i64,
) -> Result<participants::Participant, AppError> {
    Ok(participants::find_by_match_and_user(txn, match_id, user_id)
        .await?
        .expect("participant should exist"))
}

/// Reload the match domain model.
pub async fn reload_match(
    txn: &DatabaseTransaction,
    match_id: i64,
) -> Result<matches::Match, AppError> {
    Ok(matches::require_match(txn, match_id).await?)
}
