// Integration tests for undoing throws, including reversal of a finishing
// throw.

mod support;

use backend::db::txn::with_txn;
use backend::entities::matches::{MatchFormat, MatchStatus};
use backend::repos::throws;
use backend::services::matches as matches_service;
use backend::services::scoring::DartScoreService;
use backend::{AppError, ErrorCode};

use crate::support::{build_test_state, participant_row, reload_match, setup_live_match};

#[tokio::test]
async fn test_undo_removes_only_the_latest_throw_of_that_player() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "undo_latest", MatchFormat::FiveOhOne).await?;
            let service = DartScoreService;

            service
                .record_throw(txn, setup.match_id, setup.player_one, 100, false)
                .await?;
            service
                .record_throw(txn, setup.match_id, setup.player_one, 60, false)
                .await?;
            service
                .record_throw(txn, setup.match_id, setup.player_two, 45, false)
                .await?;

            service
                .undo_last_throw(txn, setup.match_id, setup.player_one)
                .await?;

            // Player one is back on 401; their first throw survives
            let latest = throws::find_latest(txn, setup.match_id, setup.player_one)
                .await
                .map_err(AppError::from)?
                .expect("first throw should remain");
            assert_eq!(latest.remaining_score, 401);
            assert_eq!(latest.points, 100);

            // Player two's log is untouched
            let other = throws::find_latest(txn, setup.match_id, setup.player_two)
                .await
                .map_err(AppError::from)?
                .expect("other player's throw should remain");
            assert_eq!(other.remaining_score, 456);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_undo_of_finishing_throw_reopens_the_match() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "undo_finish", MatchFormat::ThreeOhOne).await?;
            let service = DartScoreService;

            // 301 -> 121 -> 40 -> checkout on double 20
            service
                .record_throw(txn, setup.match_id, setup.player_one, 180, false)
                .await?;
            service
                .record_throw(txn, setup.match_id, setup.player_one, 81, false)
                .await?;
            let finish = service
                .record_throw(txn, setup.match_id, setup.player_one, 40, true)
                .await?;
            assert!(finish.finished);
            assert_eq!(
                reload_match(txn, setup.match_id).await?.status,
                MatchStatus::AwaitingConfirmation
            );

            service
                .undo_last_throw(txn, setup.match_id, setup.player_one)
                .await?;

            let m = reload_match(txn, setup.match_id).await?;
            assert_eq!(m.status, MatchStatus::Live);

            let participant = participant_row(txn, setup.match_id, setup.player_one).await?;
            assert_eq!(participant.finishing_score, None);
            assert_eq!(participant.placement, None);

            // Remaining is back to 40 and the leg can be refinished
            let latest = throws::find_latest(txn, setup.match_id, setup.player_one)
                .await
                .map_err(AppError::from)?
                .expect("pre-finish throw should remain");
            assert_eq!(latest.remaining_score, 40);

            let refinish = service
                .record_throw(txn, setup.match_id, setup.player_one, 40, true)
                .await?;
            assert!(refinish.finished);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_undo_with_no_throws_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "undo_empty", MatchFormat::FiveOhOne).await?;
            let service = DartScoreService;

            let result = service
                .undo_last_throw(txn, setup.match_id, setup.player_one)
                .await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::NoThrowsToUndo);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_undo_is_rejected_once_the_match_completed() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "undo_completed", MatchFormat::FiveOhOne).await?;
            let service = DartScoreService;

            service
                .record_throw(txn, setup.match_id, setup.player_one, 60, false)
                .await?;

            matches_service::update_match_status(
                txn,
                setup.match_id,
                MatchStatus::Completed,
                setup.admin_id,
            )
            .await?;

            let result = service
                .undo_last_throw(txn, setup.match_id, setup.player_one)
                .await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::UndoNotAllowed);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
