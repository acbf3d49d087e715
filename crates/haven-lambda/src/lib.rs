//! haven-lambda
//!
//! HTTP surface over the screening and mood crates. Stateless apart from
//! startup configuration; every route is a thin wrapper around a pure
//! function.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/instruments/{id}/score", post(routes::instruments::score))
        .route("/screenings/phq9", post(routes::screenings::classify_phq9))
        .route("/mood/summary", post(routes::mood::summarize))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
