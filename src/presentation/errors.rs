// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::apply_use_case::ApplyUseCaseError;
use crate::application::use_cases::job_use_case::JobUseCaseError;
use crate::domain::repositories::job_repository::RepositoryError;
use crate::domain::services::auth_service::AuthError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<AuthError>() {
            return match err {
                AuthError::InvalidCredentials
                | AuthError::InvalidToken
                | AuthError::SessionExpired => StatusCode::UNAUTHORIZED,
                AuthError::EmailTaken => StatusCode::CONFLICT,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::Repository(e) => repository_status(e),
                AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }
        if let Some(err) = self.0.downcast_ref::<JobUseCaseError>() {
            return job_status(err);
        }
        if let Some(err) = self.0.downcast_ref::<ApplyUseCaseError>() {
            return apply_status(err);
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        if self.0.downcast_ref::<validator::ValidationErrors>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Conflict(_) => StatusCode::CONFLICT,
        RepositoryError::Upstream(_) => StatusCode::BAD_GATEWAY,
        RepositoryError::InvalidUpstreamUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn job_status(err: &JobUseCaseError) -> StatusCode {
    match err {
        JobUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
        JobUseCaseError::Forbidden => StatusCode::FORBIDDEN,
        JobUseCaseError::NotFound => StatusCode::NOT_FOUND,
        JobUseCaseError::Repository(e) => repository_status(e),
    }
}

pub(crate) fn apply_status(err: &ApplyUseCaseError) -> StatusCode {
    match err {
        ApplyUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ApplyUseCaseError::JobNotFound => StatusCode::NOT_FOUND,
        ApplyUseCaseError::AlreadyApplied => StatusCode::CONFLICT,
        ApplyUseCaseError::Repository(e) => repository_status(e),
    }
}
