// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::application_request::ApplyRequestDto,
    domain::{
        models::{application::JobApplication, job::JobId, session::Session},
        repositories::{
            application_repository::ApplicationRepository,
            job_repository::{JobRepository, RepositoryError},
        },
    },
    infrastructure::metrics,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

#[derive(Error, Debug)]
pub enum ApplyUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Job not found")]
    JobNotFound,
    #[error("You have already applied to this job")]
    AlreadyApplied,
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApplyUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => ApplyUseCaseError::AlreadyApplied,
            RepositoryError::NotFound => ApplyUseCaseError::JobNotFound,
            other => ApplyUseCaseError::Repository(other),
        }
    }
}

/// 职位申请用例
pub struct ApplyUseCase {
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
}

impl ApplyUseCase {
    pub fn new(
        job_repo: Arc<dyn JobRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            job_repo,
            application_repo,
        }
    }

    /// 申请职位
    ///
    /// 申请保存成功后职位的申请人数加一。计数失败时撤销已保存的申请，
    /// 用户可以重新提交。
    pub async fn apply(
        &self,
        session: &Session,
        job_id: JobId,
        dto: ApplyRequestDto,
    ) -> Result<JobApplication, ApplyUseCaseError> {
        dto.validate()
            .map_err(|e| ApplyUseCaseError::ValidationError(e.to_string()))?;

        if self.job_repo.find_by_id(job_id).await?.is_none() {
            return Err(ApplyUseCaseError::JobNotFound);
        }

        let application = self
            .application_repo
            .create(JobApplication::new(
                job_id,
                session.user_id,
                dto.cover_letter,
                dto.resume_url,
            ))
            .await?;

        if let Err(e) = self.job_repo.increment_applicants(job_id).await {
            warn!(
                "Failed to count application of user {} to job {}: {}",
                session.user_id, job_id, e
            );
            self.application_repo
                .delete(job_id, session.user_id)
                .await?;
            return Err(e.into());
        }

        metrics::record_application();
        info!("User {} applied to job {}", session.user_id, job_id);
        Ok(application)
    }

    /// 当前用户的申请，最新的在前
    pub async fn my_applications(
        &self,
        session: &Session,
    ) -> Result<Vec<JobApplication>, ApplyUseCaseError> {
        Ok(self.application_repo.find_by_user(session.user_id).await?)
    }
}
