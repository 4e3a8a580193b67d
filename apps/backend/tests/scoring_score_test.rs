// Integration tests for the scoreboard and throw listing reads.

mod support;

use backend::db::txn::with_txn;
use backend::entities::matches::{MatchFormat, MatchStatus};
use backend::services::scoring::DartScoreService;
use backend::{AppError, ErrorCode};

use crate::support::{build_test_state, setup_live_match, setup_scheduled_match};

#[tokio::test]
async fn test_score_before_any_throw_reports_starting_scores() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            // Reads are valid before the match goes live
            let setup = setup_scheduled_match(txn, "fresh_score", MatchFormat::FiveOhOne).await?;
            let service = DartScoreService;

            let score = service.match_score(txn, setup.match_id).await?;
            assert_eq!(score.match_id, setup.match_id);
            assert_eq!(score.status, MatchStatus::Scheduled);
            assert_eq!(score.players.len(), 2);
            for player in &score.players {
                assert_eq!(player.current_score, 501);
                assert_eq!(player.rounds_played, 0);
                assert_eq!(player.darts_thrown, 0);
                assert!(!player.finished);
            }

            // And the throw list is empty, which is a valid result
            let throws = service.list_throws(txn, setup.match_id).await?;
            assert!(throws.is_empty());

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_score_tracks_rounds_darts_and_finish() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "score_track", MatchFormat::ThreeOhOne).await?;
            let service = DartScoreService;

            // Player one: four throws over two rounds, then checkout
            for points in [100, 100, 59, 40] {
                service
                    .record_throw(txn, setup.match_id, setup.player_one, points, false)
                    .await?;
            }
            service
                .record_throw(txn, setup.match_id, setup.player_one, 2, true)
                .await?;

            // Player two: one ordinary throw
            service
                .record_throw(txn, setup.match_id, setup.player_two, 26, false)
                .await?;

            let score = service.match_score(txn, setup.match_id).await?;
            assert_eq!(score.status, MatchStatus::AwaitingConfirmation);

            let one = score
                .players
                .iter()
                .find(|p| p.user_id == setup.player_one)
                .expect("player one in scoreboard");
            assert_eq!(one.current_score, 0);
            assert_eq!(one.rounds_played, 2);
            assert_eq!(one.darts_thrown, 5);
            assert!(one.finished);

            let two = score
                .players
                .iter()
                .find(|p| p.user_id == setup.player_two)
                .expect("player two in scoreboard");
            assert_eq!(two.current_score, 275);
            assert_eq!(two.rounds_played, 1);
            assert_eq!(two.darts_thrown, 1);
            assert!(!two.finished);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_list_throws_orders_by_player_round_throw() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let setup = setup_live_match(txn, "list_order", MatchFormat::FiveOhOne).await?;
            let service = DartScoreService;

            // Interleave the two players
            for (player, points) in [
                (setup.player_one, 60),
                (setup.player_two, 41),
                (setup.player_one, 55),
                (setup.player_two, 39),
                (setup.player_one, 100),
                (setup.player_one, 5),
            ] {
                service
                    .record_throw(txn, setup.match_id, player, points, false)
                    .await?;
            }

            let all = service.list_throws(txn, setup.match_id).await?;
            assert_eq!(all.len(), 6);

            // Sorted by player, then round, then throw index
            let keys: Vec<(i64, i32, i32)> = all
                .iter()
                .map(|t| (t.user_id, t.round_number, t.throw_number))
                .collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);

            // Player one filled round 1 and started round 2
            let one: Vec<(i32, i32)> = all
                .iter()
                .filter(|t| t.user_id == setup.player_one)
                .map(|t| (t.round_number, t.throw_number))
                .collect();
            assert_eq!(one, vec![(1, 1), (1, 2), (1, 3), (2, 1)]);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_score_for_unknown_match_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = DartScoreService;
            let result = service.match_score(txn, 424_242).await;
            assert_eq!(result.unwrap_err().code(), ErrorCode::MatchNotFound);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
