// Integration tests for tournament CRUD and its admin checks.

mod support;

use backend::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use backend::db::txn::with_txn;
use backend::entities::matches::MatchFormat;
use backend::entities::tournaments::{TournamentFormat, TournamentStatus};
use backend::services::tournaments as tournaments_service;
use backend::{AppError, ErrorCode};

use crate::support::{build_test_state, create_test_user};

fn create_dto(name: &str, admin_id: i64) -> TournamentCreate {
    TournamentCreate {
        name: name.to_string(),
        description: Some("Club night".to_string()),
        format: TournamentFormat::Group,
        match_format: MatchFormat::FiveOhOne,
        start_date: time::OffsetDateTime::now_utc() + time::Duration::days(14),
        registration_deadline: None,
        max_players: 32,
        number_of_groups: 4,
        admin_id,
    }
}

#[tokio::test]
async fn test_create_validates_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let admin = create_test_user(txn, "t_create", "admin").await?;

            // Blank name
            let mut dto = create_dto("   ", admin);
            let result = tournaments_service::create_tournament(txn, dto).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::ValidationError);

            // Too few players
            dto = create_dto("Spring Open", admin);
            dto.max_players = 1;
            let result = tournaments_service::create_tournament(txn, dto).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::ValidationError);

            // Start date in the past
            dto = create_dto("Spring Open", admin);
            dto.start_date = time::OffsetDateTime::now_utc() - time::Duration::days(1);
            let result = tournaments_service::create_tournament(txn, dto).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::ValidationError);

            // Valid input creates a Planning tournament
            let created =
                tournaments_service::create_tournament(txn, create_dto("Spring Open", admin))
                    .await?;
            assert_eq!(created.status, TournamentStatus::Planning);
            assert_eq!(created.admin_id, admin);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_are_admin_only() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let admin = create_test_user(txn, "t_admin", "admin").await?;
            let outsider = create_test_user(txn, "t_admin", "mallory").await?;

            let created =
                tournaments_service::create_tournament(txn, create_dto("Autumn Cup", admin))
                    .await?;

            let update = TournamentUpdate {
                status: Some(TournamentStatus::Active),
                ..Default::default()
            };

            let result = tournaments_service::update_tournament(
                txn,
                created.id,
                update.clone(),
                outsider,
            )
            .await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::NotTournamentAdmin);

            let updated =
                tournaments_service::update_tournament(txn, created.id, update, admin).await?;
            assert_eq!(updated.status, TournamentStatus::Active);

            let result = tournaments_service::delete_tournament(txn, created.id, outsider).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::NotTournamentAdmin);

            tournaments_service::delete_tournament(txn, created.id, admin).await?;
            let result = tournaments_service::get_tournament(txn, created.id).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::TournamentNotFound);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_list_returns_newest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let admin = create_test_user(txn, "t_list", "admin").await?;

            let first =
                tournaments_service::create_tournament(txn, create_dto("First", admin)).await?;
            let second =
                tournaments_service::create_tournament(txn, create_dto("Second", admin)).await?;

            let listed = tournaments_service::list_tournaments(txn).await?;
            assert_eq!(listed.len(), 2);
            let first_pos = listed.iter().position(|t| t.id == first.id).unwrap();
            let second_pos = listed.iter().position(|t| t.id == second.id).unwrap();
            assert!(second_pos <= first_pos, "newest tournament should sort first");

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
