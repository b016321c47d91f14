use crate::abstract_trait::DynUserQueryRepository;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};

/// Guards the authenticated routes. Accepts the access token either from
/// the `token` cookie or a `Bearer` header, and rejects tokens whose user
/// no longer exists.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    Extension(users): Extension<DynUserQueryRepository>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::failed(
                    "You are not logged in, please provide token",
                    401,
                )),
            ));
        }
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => id as i32,
        Err(_) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::failed("Invalid token", 401)),
            ));
        }
    };

    let user = users.find_by_id(user_id).await.map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::failed("Internal server error", 500)),
        )
    })?;

    if user.is_none() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::failed("Unauthorized user", 403)),
        ));
    }

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
