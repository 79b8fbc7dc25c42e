use crate::{
    abstract_trait::{catalog::DynProductCatalogService, category::service::DynCategoryService},
    domain::requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
    middleware::{params::QueryParams, validate::EnvelopeJson},
    model::Category,
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
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/v1/category/add",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Invalid body or store failure", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    EnvelopeJson(body): EnvelopeJson<CreateCategoryRequest>,
) -> Result<ApiResponse<Category>, HttpError> {
    let mut category = Category::new(body.name, body.parent_id);
    service.create(&mut category).await?;

    Ok(ApiResponse::success(category))
}

#[utoipa::path(
    post,
    path = "/v1/category/update",
    tag = "Category",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Invalid body or store failure", body = ErrorResponse)
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    EnvelopeJson(body): EnvelopeJson<UpdateCategoryRequest>,
) -> Result<ApiResponse<Category>, HttpError> {
    let mut category = Category {
        id: body.id,
        name: body.name,
        parent_id: body.parent_id,
        ..Default::default()
    };
    service.update(&mut category).await?;

    // The stored row also carries `created` and, when omitted, the kept parent.
    let category = match service.find_by_id(category.id).await {
        Ok(stored) => stored,
        Err(e) => {
            warn!("⚠️ Could not reload category {}: {e}", category.id);
            category
        }
    };

    Ok(ApiResponse::success(category))
}

#[utoipa::path(
    get,
    path = "/v1/category/detail",
    tag = "Category",
    params(("id" = i64, Query, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<Category>),
        (status = 400, description = "Bad id or not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    params: QueryParams,
) -> Result<ApiResponse<Category>, HttpError> {
    let id = params.int("id")?;
    let category = service.find_by_id(id).await?;

    Ok(ApiResponse::success(category))
}

#[utoipa::path(
    get,
    path = "/v1/category/search",
    tag = "Category",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive name filter"),
        ("limit" = i64, Query, description = "Page size, 0 means 10"),
        ("offset" = i64, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Matching categories", body = ApiResponse<EntriesResponse<Category>>),
        (status = 400, description = "Bad paging parameters", body = ErrorResponse)
    )
)]
pub async fn search_categories(
    Extension(service): Extension<DynCategoryService>,
    params: QueryParams,
) -> Result<ApiResponse<EntriesResponse<Category>>, HttpError> {
    let (limit, offset) = params.page()?;
    let (categories, found) = service
        .search(params.text("query"), offset, limit)
        .await?;

    Ok(ApiResponse::success(EntriesResponse::new(categories, found)))
}

#[utoipa::path(
    get,
    path = "/v1/category/delete",
    tag = "Category",
    params(("id" = i64, Query, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<String>),
        (status = 400, description = "Bad id or not found", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    Extension(catalog): Extension<DynProductCatalogService>,
    params: QueryParams,
) -> Result<ApiResponse<&'static str>, HttpError> {
    let id = params.int("id")?;
    catalog.delete_category(id).await?;

    info!("🗑️ Category {id} removed");
    Ok(ApiResponse::success("success"))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/category/add", post(create_category))
        .route("/v1/category/update", post(update_category))
        .route("/v1/category/detail", get(get_category))
        .route("/v1/category/search", get(search_categories))
        .route("/v1/category/delete", get(delete_category))
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.di_container.catalog_service.clone()))
}
