// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::application_request::ApplyRequestDto,
        use_cases::apply_use_case::{ApplyUseCase, ApplyUseCaseError},
    },
    domain::models::job::JobId,
    presentation::{errors::apply_status, extractors::session::CurrentSession},
};

/// 申请职位
pub async fn apply(
    Extension(use_case): Extension<Arc<ApplyUseCase>>,
    CurrentSession(session): CurrentSession,
    Path(job_id): Path<JobId>,
    Json(payload): Json<ApplyRequestDto>,
) -> impl IntoResponse {
    match use_case.apply(&session, job_id, payload).await {
        Ok(application) => (StatusCode::CREATED, Json(application)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 当前用户的申请记录
pub async fn my_applications(
    Extension(use_case): Extension<Arc<ApplyUseCase>>,
    CurrentSession(session): CurrentSession,
) -> impl IntoResponse {
    match use_case.my_applications(&session).await {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<ApplyUseCaseError> for (StatusCode, String) {
    fn from(err: ApplyUseCaseError) -> Self {
        (apply_status(&err), err.to_string())
    }
}
