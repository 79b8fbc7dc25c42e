use crate::{
    abstract_trait::{
        catalog::DynProductCatalogService, product::service::DynProductService,
        product_price::DynProductPriceService,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductDetailResponse,
    },
    middleware::{params::QueryParams, validate::EnvelopeJson},
    model::{Product, ProductPrice},
    state::AppState,
};
use axum::{
    extract::{Extension, Path},
    routing::{get, post},
};
use shared::{
    domain::responses::{ApiResponse, EntriesResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/v1/product/add",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created with its links and price tiers", body = ApiResponse<Product>),
        (status = 400, description = "Invalid body or a failed step", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(catalog): Extension<DynProductCatalogService>,
    EnvelopeJson(body): EnvelopeJson<CreateProductRequest>,
) -> Result<ApiResponse<Product>, HttpError> {
    let product = catalog.create_product(&body).await?;
    Ok(ApiResponse::success(product))
}

#[utoipa::path(
    post,
    path = "/v1/product/update",
    tag = "Product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product, links and price tiers replaced", body = ApiResponse<Product>),
        (status = 400, description = "Invalid body or a failed step", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(catalog): Extension<DynProductCatalogService>,
    EnvelopeJson(body): EnvelopeJson<UpdateProductRequest>,
) -> Result<ApiResponse<Product>, HttpError> {
    let product = catalog.update_product(&body).await?;
    Ok(ApiResponse::success(product))
}

#[utoipa::path(
    get,
    path = "/v1/product/detail",
    tag = "Product",
    params(("id" = i64, Query, description = "Product ID")),
    responses(
        (status = 200, description = "Product with its categories", body = ApiResponse<ProductDetailResponse>),
        (status = 400, description = "Bad id or not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(catalog): Extension<DynProductCatalogService>,
    params: QueryParams,
) -> Result<ApiResponse<ProductDetailResponse>, HttpError> {
    let id = params.int("id")?;
    let detail = catalog.product_detail(id).await?;

    Ok(ApiResponse::success(detail))
}

#[utoipa::path(
    get,
    path = "/v1/product/compare/{id_1}/{id_2}",
    tag = "Product",
    params(
        ("id_1" = i64, Path, description = "First product ID"),
        ("id_2" = i64, Path, description = "Second product ID")
    ),
    responses(
        (status = 200, description = "Products that could be loaded, in request order", body = ApiResponse<Vec<Product>>),
        (status = 400, description = "Unparseable id", body = ErrorResponse)
    )
)]
pub async fn compare_products(
    Extension(service): Extension<DynProductService>,
    Path((first, second)): Path<(String, String)>,
) -> Result<ApiResponse<Vec<Product>>, HttpError> {
    let first = parse_path_id("id_1", &first)?;
    let second = parse_path_id("id_2", &second)?;

    Ok(ApiResponse::success(service.compare(first, second).await))
}

fn parse_path_id(name: &str, raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|e| HttpError::BadRequest(format!("invalid {name} parameter {raw:?}: {e}")))
}

#[utoipa::path(
    get,
    path = "/v1/product/search",
    tag = "Product",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive name or SKU filter"),
        ("limit" = i64, Query, description = "Page size, 0 means 10"),
        ("offset" = i64, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<EntriesResponse<Product>>),
        (status = 400, description = "Bad paging parameters", body = ErrorResponse)
    )
)]
pub async fn search_products(
    Extension(service): Extension<DynProductService>,
    params: QueryParams,
) -> Result<ApiResponse<EntriesResponse<Product>>, HttpError> {
    let (limit, offset) = params.page()?;
    let (products, found) = service.search(params.text("query"), offset, limit).await?;

    Ok(ApiResponse::success(EntriesResponse::new(products, found)))
}

#[utoipa::path(
    get,
    path = "/v1/product/price",
    tag = "Product",
    params(
        ("id" = i64, Query, description = "Product ID"),
        ("amount" = i64, Query, description = "Order quantity")
    ),
    responses(
        (status = 200, description = "Price tier for the quantity", body = ApiResponse<ProductPrice>),
        (status = 400, description = "Bad parameters or no applicable tier", body = ErrorResponse)
    )
)]
pub async fn get_product_price(
    Extension(prices): Extension<DynProductPriceService>,
    params: QueryParams,
) -> Result<ApiResponse<ProductPrice>, HttpError> {
    let id = params.int("id")?;
    let amount = params.int("amount")?;
    let price = prices.find_by_amount(id, amount).await?;

    Ok(ApiResponse::success(price))
}

#[utoipa::path(
    get,
    path = "/v1/product/delete",
    tag = "Product",
    params(("id" = i64, Query, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>),
        (status = 400, description = "Bad id or not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(catalog): Extension<DynProductCatalogService>,
    params: QueryParams,
) -> Result<ApiResponse<&'static str>, HttpError> {
    let id = params.int("id")?;
    catalog.delete_product(id).await?;

    Ok(ApiResponse::success("success"))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/product/add", post(create_product))
        .route("/v1/product/update", post(update_product))
        .route("/v1/product/detail", get(get_product))
        .route("/v1/product/compare/{id_1}/{id_2}", get(compare_products))
        .route("/v1/product/search", get(search_products))
        .route("/v1/product/price", get(get_product_price))
        .route("/v1/product/delete", get(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.product_price_service.clone()))
        .layer(Extension(app_state.di_container.catalog_service.clone()))
}
