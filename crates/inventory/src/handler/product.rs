use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, ProductDetailQuery, UpdateProductRequest},
        response::{
            ApiResponse, ProductDetailResponse, ProductListResponse, ProductTreeResponse,
            StatusResponse,
        },
    },
    middleware::{SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/add-product",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductTreeResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/list-products",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products with their variant trees", body = ProductListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_products_handler(
    Extension(service): Extension<DynProductQueryService>,
    Extension(_user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_products().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/product-details",
    tag = "Product",
    params(ProductDetailQuery),
    responses(
        (status = 200, description = "Product details", body = ProductDetailResponse),
        (status = 400, description = "Missing product code"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn product_details_handler(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<ProductDetailQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_code(params.product_code.as_deref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/update-stock",
    tag = "Product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = StatusResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_stock_handler(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let guarded = OpenApiRouter::new()
        .route("/api/add-product", post(add_product_handler))
        .route("/api/list-products", get(list_products_handler))
        .route_layer(middleware::from_fn(auth_middleware));

    // product-details and update-stock predate the auth middleware and
    // stay open, matching the original contract.
    OpenApiRouter::new()
        .merge(guarded)
        .route("/api/product-details", get(product_details_handler))
        .route("/api/update-stock", post(update_stock_handler))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
