//! Readiness endpoint

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use database::mongodb::check_health;

use crate::state::AppState;

/// `200` once MongoDB answers a ping, `503` otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];
    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
