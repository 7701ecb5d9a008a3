use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_tokens};
use crate::system::users::service as user_service;

fn internal(e: anyhow::Error) -> StatusCode {
    tracing::error!("Auth failure: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(request.username.trim(), &request.password)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            tracing::warn!("Failed login for '{}'", request.username.trim());
            StatusCode::UNAUTHORIZED
        })?;

    let user = UserInfo::from(&user);
    let access_token = jwt::generate_access_token(&user).await.map_err(internal)?;
    let refresh_token = refresh_tokens::issue(&user.id).await.map_err(internal)?;

    tracing::info!("User '{}' signed in", user.username);
    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user,
    }))
}

pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = refresh_tokens::user_for(&request.refresh_token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(internal)?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&UserInfo::from(&user))
        .await
        .map_err(internal)?;
    Ok(Json(RefreshResponse { access_token }))
}

pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, StatusCode> {
    refresh_tokens::revoke(&request.refresh_token)
        .await
        .map_err(internal)?;
    Ok(StatusCode::OK)
}

/// Behind `require_auth`
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(UserInfo::from(&user)))
}
