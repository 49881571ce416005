// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::job_request::{CreateJobRequestDto, JobQueryRequestDto, UpdateJobRequestDto},
        use_cases::job_use_case::{JobUseCase, JobUseCaseError},
    },
    domain::models::job::JobId,
    presentation::{errors::job_status, extractors::session::CurrentSession},
};

/// 按条件列出职位
pub async fn list_jobs(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    Query(query): Query<JobQueryRequestDto>,
) -> impl IntoResponse {
    match use_case.list_jobs(query).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 获取职位详情
pub async fn get_job(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    Path(id): Path<JobId>,
) -> impl IntoResponse {
    match use_case.get_job(id).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 获取相似职位
pub async fn similar_jobs(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    Path(id): Path<JobId>,
) -> impl IntoResponse {
    match use_case.similar_jobs(id).await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 发布新职位
pub async fn create_job(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<CreateJobRequestDto>,
) -> impl IntoResponse {
    match use_case.create_job(&session, payload).await {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 更新职位
pub async fn update_job(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<JobId>,
    Json(payload): Json<UpdateJobRequestDto>,
) -> impl IntoResponse {
    match use_case.update_job(&session, id, payload).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 删除职位
pub async fn delete_job(
    Extension(use_case): Extension<Arc<JobUseCase>>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<JobId>,
) -> impl IntoResponse {
    match use_case.delete_job(&session, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: JobUseCaseError) -> axum::response::Response {
    let (status, msg): (StatusCode, String) = err.into();
    if status.is_server_error() {
        tracing::error!("Job request failed: {}", msg);
    }
    (status, Json(json!({ "error": msg }))).into_response()
}

impl From<JobUseCaseError> for (StatusCode, String) {
    fn from(err: JobUseCaseError) -> Self {
        (job_status(&err), err.to_string())
    }
}
