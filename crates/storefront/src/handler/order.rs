use crate::{
    abstract_trait::{order::service::DynOrderService, product::service::DynProductService},
    domain::requests::order::CreateOrderRequest,
    middleware::{params::QueryParams, validate::EnvelopeJson},
    model::Order,
    state::AppState,
};
use axum::{
    extract::Extension,
    routing::{get, post},
};
use shared::{
    domain::responses::{ApiResponse, EntriesResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/v1/order/add",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<Order>),
        (status = 400, description = "Invalid body or unknown product", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(orders): Extension<DynOrderService>,
    Extension(products): Extension<DynProductService>,
    EnvelopeJson(body): EnvelopeJson<CreateOrderRequest>,
) -> Result<ApiResponse<Order>, HttpError> {
    products.find_by_id(body.product_id).await?;

    let mut order = Order {
        product_id: body.product_id,
        amount: body.amount,
        price: body.price,
        status: body.status,
        ..Default::default()
    };
    orders.create(&mut order).await?;

    Ok(ApiResponse::success(order))
}

#[utoipa::path(
    get,
    path = "/v1/order/list",
    tag = "Order",
    params(
        ("limit" = i64, Query, description = "Page size, 0 means 10"),
        ("offset" = i64, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Page of orders", body = ApiResponse<EntriesResponse<Order>>),
        (status = 400, description = "Bad paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    Extension(orders): Extension<DynOrderService>,
    params: QueryParams,
) -> Result<ApiResponse<EntriesResponse<Order>>, HttpError> {
    let (limit, offset) = params.page()?;
    let (data, found) = orders.find_all(offset, limit).await?;

    Ok(ApiResponse::success(EntriesResponse::new(data, found)))
}

#[utoipa::path(
    get,
    path = "/v1/order/delete",
    tag = "Order",
    params(("id" = i64, Query, description = "Order ID")),
    responses(
        (status = 200, description = "Always reported as deleted once the id parses", body = ApiResponse<String>),
        (status = 400, description = "Unparseable id", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(orders): Extension<DynOrderService>,
    params: QueryParams,
) -> Result<ApiResponse<&'static str>, HttpError> {
    let id = params.int("id")?;

    // Clients have always seen success here, whatever the store said.
    if let Err(e) = orders.delete(id).await {
        error!("❌ Failed to delete order {id}: {e}");
    }

    Ok(ApiResponse::success("success"))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/order/add", post(create_order))
        .route("/v1/order/list", get(list_orders))
        .route("/v1/order/delete", get(delete_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
