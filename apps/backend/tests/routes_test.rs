// HTTP-level tests: wiring, auth extraction and problem+json error bodies.

mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::routes;
use backend::AppError;
use serde_json::Value;

use crate::support::build_test_state;

#[tokio::test]
async fn test_health_endpoint() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn test_unknown_match_is_a_problem_json_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/matches/999999/score")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MATCH_NOT_FOUND");
    assert_eq!(body["status"], 404);
    assert!(body["trace_id"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_mutations_require_a_bearer_token() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(serde_json::json!({
            "name": "No Auth Open",
            "start_date": "2030-01-01T18:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED_MISSING_BEARER");

    Ok(())
}

async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    name: &str,
) -> (i64, String) {
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(serde_json::json!({
            "username": name,
            "email": format!("{name}@example.com"),
            "password": "very-secret-1",
            "full_name": name
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    (
        body["user_id"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_full_flow_from_registration_to_scoreboard() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let (_admin_id, admin_token) = register(&app, "flow_admin").await;
    let (alice_id, alice_token) = register(&app, "flow_alice").await;
    let (_bob_id, bob_token) = register(&app, "flow_bob").await;

    // Admin creates a tournament and a match
    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .set_json(serde_json::json!({
            "name": "Flow Open",
            "match_format": "301",
            "start_date": "2030-01-01T18:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tournament: Value = test::read_body_json(resp).await;
    let tournament_id = tournament["id"].as_i64().unwrap();
    assert_eq!(tournament["match_format"], "301");

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .set_json(serde_json::json!({ "tournament_id": tournament_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let match_body: Value = test::read_body_json(resp).await;
    let match_id = match_body["id"].as_i64().unwrap();
    assert_eq!(match_body["status"], "SCHEDULED");

    // Both players join their own roster spot
    for token in [&alice_token, &bob_token] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/matches/{match_id}/participants"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Admin starts the match
    let req = test::TestRequest::put()
        .uri(&format!("/api/matches/{match_id}/status"))
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .set_json(serde_json::json!({ "status": "LIVE" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Alice throws 60
    let req = test::TestRequest::post()
        .uri(&format!("/api/matches/{match_id}/throws"))
        .insert_header(("Authorization", format!("Bearer {alice_token}")))
        .set_json(serde_json::json!({ "points": 60, "is_double": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let throw_body: Value = test::read_body_json(resp).await;
    assert_eq!(throw_body["throw"]["remaining_score"], 241);
    assert_eq!(throw_body["message"], "Dart recorded");
    assert_eq!(throw_body["finished"], false);

    // Scoreboard reflects it without auth
    let req = test::TestRequest::get()
        .uri(&format!("/api/matches/{match_id}/score"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let score: Value = test::read_body_json(resp).await;
    assert_eq!(score["status"], "LIVE");
    let alice = score["player_scores"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["user_id"].as_i64() == Some(alice_id))
        .expect("alice on the scoreboard");
    assert_eq!(alice["current_score"], 241);
    assert_eq!(alice["darts_thrown"], 1);
    assert_eq!(alice["status"], "In Progress");

    // Alice undoes her throw
    let req = test::TestRequest::delete()
        .uri(&format!("/api/matches/{match_id}/throws/latest"))
        .insert_header(("Authorization", format!("Bearer {alice_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let undo: Value = test::read_body_json(resp).await;
    assert_eq!(undo["undone"], true);

    Ok(())
}
