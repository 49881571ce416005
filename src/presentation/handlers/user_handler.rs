// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::CurrentSession;
use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// 列出全部用户
pub async fn list_users(
    Extension(auth_service): Extension<Arc<AuthService>>,
    _session: CurrentSession,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(auth_service.list_users().await?))
}

/// 按ID获取用户
pub async fn get_user(
    Extension(auth_service): Extension<Arc<AuthService>>,
    _session: CurrentSession,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    Ok(Json(auth_service.profile(user_id).await?))
}
