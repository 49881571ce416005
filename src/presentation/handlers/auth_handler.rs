// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth_request::{
    LoginRequestDto, LoginResponseDto, RegisterRequestDto, TokenResponseDto,
};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::{AuthService, Registration};
use crate::infrastructure::metrics;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::CurrentSession;
use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// 注册新用户
///
/// # 返回值
///
/// * `201` - 注册成功，返回公开的用户信息
/// * `400` - 字段校验失败
/// * `409` - 邮箱已被注册
pub async fn register(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(payload): Json<RegisterRequestDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let registration = Registration::try_from(payload)?;
    let user = auth_service.register(registration).await?;
    metrics::record_registration();
    Ok((StatusCode::CREATED, Json(user)))
}

/// 登录
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(payload): Json<LoginRequestDto>,
) -> Result<Json<LoginResponseDto>, AppError> {
    payload.validate()?;

    let result = auth_service.login(&payload.email, &payload.password).await;
    metrics::record_login(result.is_ok());
    let (user, session) = result?;

    Ok(Json(LoginResponseDto {
        user,
        token: TokenResponseDto::from(&session),
    }))
}

/// 注销当前令牌
pub async fn logout(
    Extension(auth_service): Extension<Arc<AuthService>>,
    CurrentSession(session): CurrentSession,
) -> Result<StatusCode, AppError> {
    auth_service.logout(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 刷新令牌
pub async fn refresh(
    Extension(auth_service): Extension<Arc<AuthService>>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<TokenResponseDto>, AppError> {
    let fresh = auth_service.refresh(&session).await?;
    Ok(Json(TokenResponseDto::from(&fresh)))
}

/// 当前用户资料
pub async fn profile(
    Extension(auth_service): Extension<Arc<AuthService>>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<User>, AppError> {
    Ok(Json(auth_service.profile(session.user_id).await?))
}
