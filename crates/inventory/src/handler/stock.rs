use crate::{
    abstract_trait::DynStockCommandService,
    domain::{
        requests::StockMutationRequest,
        response::{ApiResponse, StockResponse},
    },
    middleware::{SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, middleware, response::IntoResponse, routing::post,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/add-stock",
    tag = "Stock",
    security(("bearer_auth" = [])),
    request_body = StockMutationRequest,
    responses(
        (status = 200, description = "Stock added", body = ApiResponse<StockResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sub-varient not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_stock_handler(
    Extension(service): Extension<DynStockCommandService>,
    Extension(_user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockMutationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_stock(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/remove-stock",
    tag = "Stock",
    security(("bearer_auth" = [])),
    request_body = StockMutationRequest,
    responses(
        (status = 200, description = "Stock removed", body = ApiResponse<StockResponse>),
        (status = 400, description = "Validation error or insufficient stock"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sub-varient not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn remove_stock_handler(
    Extension(service): Extension<DynStockCommandService>,
    Extension(_user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockMutationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_stock(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/add-stock", post(add_stock_handler))
        .route("/api/remove-stock", post(remove_stock_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.stock_command.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
