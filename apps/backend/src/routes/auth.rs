//! Registration and login endpoints.

use std::time::SystemTime;

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::users::User;
use crate::services::users::{login_user, register_user, RegisterInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub token: String,
}

fn auth_response(user: User, app_state: &AppState) -> Result<AuthResponse, AppError> {
    let token = mint_access_token(
        user.id,
        &user.username,
        SystemTime::now(),
        &app_state.security,
    )?;
    Ok(AuthResponse {
        user_id: user.id,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
        token,
    })
}

/// POST /api/auth/register
async fn register(
    http_req: HttpRequest,
    req: web::Json<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = RegisterInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        full_name: req.full_name.clone(),
    };

    let user = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { register_user(txn, input).await })
    })
    .await?;

    let response = auth_response(user, &app_state)?;
    Ok(HttpResponse::Created().json(response))
}

/// POST /api/auth/login
async fn login(
    http_req: HttpRequest,
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = req.username.clone();
    let password = req.password.clone();

    let user = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { login_user(txn, &username, &password).await })
    })
    .await?;

    let response = auth_response(user, &app_state)?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/register").route(web::post().to(register)));
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)));
}
