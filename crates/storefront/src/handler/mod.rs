mod category;
mod order;
mod product;

#[cfg(test)]
mod tests;

use crate::{middleware::metrics::track_metrics, state::AppState};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{Method, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    config::Config,
    domain::responses::ApiResponse,
    errors::{ErrorResponse, HttpError},
    utils::shutdown_signal,
};
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::watch};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        info_handler,

        category::create_category,
        category::update_category,
        category::get_category,
        category::search_categories,
        category::delete_category,

        product::create_product,
        product::update_product,
        product::get_product,
        product::compare_products,
        product::search_products,
        product::get_product_price,
        product::delete_product,

        order::create_order,
        order::list_orders,
        order::delete_order,
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "Info", description = "Liveness"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/v1/info",
    tag = "Info",
    responses((status = 200, description = "Service is up", body = ApiResponse<String>))
)]
pub async fn info_handler() -> ApiResponse<&'static str> {
    ApiResponse::success("success")
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    let mut buffer = String::new();

    encode(&mut buffer, &state.registry)
        .map_err(|e| HttpError::Internal(format!("Failed to encode metrics: {e}")))?;

    Ok((
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response())
}

pub struct AppRouter;

impl AppRouter {
    /// The complete application: `/v1` routes, metrics, API docs and the middleware stack.
    pub fn build(app_state: AppState, server_timeout: Duration) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .route("/v1/info", get(info_handler))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(middleware::from_fn_with_state(shared_state, track_metrics))
            .layer(TimeoutLayer::new(server_timeout))
            .layer(CatchPanicLayer::new())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Serves until SIGINT/SIGTERM, then lets in-flight requests drain for at most
    /// `graceful_timeout`.
    pub async fn serve(config: &Config, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state, config.server_timeout);

        let listener = TcpListener::bind(config.address)
            .await
            .with_context(|| format!("Failed to bind {}", config.address))?;
        let addr = listener.local_addr()?;

        info!("🚀 Server running on http://{addr}");
        info!("📖 Swagger UI: http://{addr}/swagger-ui");
        info!("📊 Metrics: http://{addr}/metrics");

        let (stop_tx, mut stop_rx) = watch::channel(false);

        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.changed().await;
                })
                .await
        });

        tokio::select! {
            finished = &mut server => {
                return finished
                    .context("Server task failed")?
                    .context("Server stopped unexpectedly");
            }
            _ = shutdown_signal() => {}
        }

        let _ = stop_tx.send(true);
        info!(
            "⏳ Draining in-flight requests for up to {}s",
            config.graceful_timeout.as_secs()
        );

        match tokio::time::timeout(config.graceful_timeout, server).await {
            Ok(finished) => finished
                .context("Server task failed")?
                .context("Server error during shutdown")?,
            Err(_) => warn!("⏱️ Graceful timeout elapsed; abandoning remaining requests"),
        }

        info!("👋 Server stopped");
        Ok(())
    }
}
