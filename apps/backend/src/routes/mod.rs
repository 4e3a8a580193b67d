use actix_web::web;

pub mod auth;
pub mod health;
pub mod matches;
pub mod scoring;
pub mod tournaments;

/// Register every route. Modules register full paths, so the same
/// configuration serves production (`main.rs`) and test app builders.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    auth::configure_routes(cfg);
    tournaments::configure_routes(cfg);
    matches::configure_routes(cfg);
    scoring::configure_routes(cfg);
}
