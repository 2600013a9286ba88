//! forewarn-api
//!
//! HTTP surface of the risk diagnosis pipeline. The router and state live
//! in the library so integration tests can run the real service against the
//! in-memory store; the binary only wires production backends.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;
pub use state::AppState;

/// The full route table. The diagnosis endpoint itself only ever fails for
/// validation or persistence reasons; everything else degrades inside the
/// pipeline.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/diagnose", post(routes::diagnose::diagnose))
        .route("/diagnose/history", get(routes::diagnose::history))
        .route("/diagnose/trend", get(routes::diagnose::trend))
        .route("/benchmark", get(routes::benchmark::get_benchmark))
        .route(
            "/benchmark/compare",
            post(routes::benchmark::compare_benchmark),
        )
        .route("/chat", post(routes::chat::chat))
        // Layers run outermost-last: identity must wrap audit so the
        // audit event sees the resolved caller.
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(axum_mw::from_fn(middleware::identity::resolve_identity))
        .layer(cors)
        .with_state(state)
}
