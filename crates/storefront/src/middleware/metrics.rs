use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::utils::{Method, Status};
use std::{sync::Arc, time::Instant};

/// Records one request sample per response, labelled by method and outcome.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = Method::from(req.method());

    let response = next.run(req).await;

    let status = if response.status().is_success() {
        Status::Success
    } else {
        Status::Error
    };
    state
        .metrics
        .record(method, status, start.elapsed().as_secs_f64());

    response
}
