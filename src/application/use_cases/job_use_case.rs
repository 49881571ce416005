// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::job_request::{CreateJobRequestDto, JobQueryRequestDto, UpdateJobRequestDto},
    config::settings::ListingSettings,
    domain::{
        models::{
            job::{JobId, JobListing, JobListingPatch, NewJobListing},
            query::PagedResult,
            session::Session,
        },
        repositories::job_repository::{JobRepository, RepositoryError},
        services::similar_jobs::similar_jobs,
    },
    infrastructure::metrics,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Error, Debug)]
pub enum JobUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Only recruiters can manage job listings")]
    Forbidden,
    #[error("Job not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<validator::ValidationErrors> for JobUseCaseError {
    fn from(errors: validator::ValidationErrors) -> Self {
        JobUseCaseError::ValidationError(errors.to_string())
    }
}

/// 职位用例
///
/// 查询与详情对所有人开放，创建、更新和删除只允许招聘者
pub struct JobUseCase {
    job_repo: Arc<dyn JobRepository>,
    settings: ListingSettings,
}

impl JobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>, settings: ListingSettings) -> Self {
        Self { job_repo, settings }
    }

    /// 按查询条件列出职位
    pub async fn list_jobs(&self, dto: JobQueryRequestDto) -> Result<PagedResult, JobUseCaseError> {
        if let Some(page_size) = dto.page_size {
            if page_size == 0 || page_size > self.settings.max_page_size {
                return Err(JobUseCaseError::ValidationError(format!(
                    "pageSize must be between 1 and {}",
                    self.settings.max_page_size
                )));
            }
        }

        let params = dto.into_query_parameters(self.settings.default_page_size);
        let result = self.job_repo.list_jobs(&params).await?;
        metrics::record_listing_query(result.total_matched);
        Ok(result)
    }

    pub async fn get_job(&self, id: JobId) -> Result<JobListing, JobUseCaseError> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or(JobUseCaseError::NotFound)
    }

    /// 相似职位推荐
    pub async fn similar_jobs(&self, id: JobId) -> Result<Vec<JobListing>, JobUseCaseError> {
        let target = self.get_job(id).await?;
        let listings = self.job_repo.find_all().await?;
        Ok(similar_jobs(&listings, &target, self.settings.similar_limit))
    }

    pub async fn create_job(
        &self,
        session: &Session,
        dto: CreateJobRequestDto,
    ) -> Result<JobListing, JobUseCaseError> {
        require_recruiter(session)?;
        dto.validate()?;

        let job = self.job_repo.create(NewJobListing::from(dto)).await?;
        info!("User {} created job {}", session.user_id, job.id);
        Ok(job)
    }

    pub async fn update_job(
        &self,
        session: &Session,
        id: JobId,
        dto: UpdateJobRequestDto,
    ) -> Result<JobListing, JobUseCaseError> {
        require_recruiter(session)?;
        dto.validate()?;

        let job = self
            .job_repo
            .update(id, JobListingPatch::from(dto))
            .await?
            .ok_or(JobUseCaseError::NotFound)?;
        info!("User {} updated job {}", session.user_id, job.id);
        Ok(job)
    }

    pub async fn delete_job(&self, session: &Session, id: JobId) -> Result<(), JobUseCaseError> {
        require_recruiter(session)?;

        if !self.job_repo.delete(id).await? {
            return Err(JobUseCaseError::NotFound);
        }
        info!("User {} deleted job {}", session.user_id, id);
        Ok(())
    }
}

fn require_recruiter(session: &Session) -> Result<(), JobUseCaseError> {
    if session.is_recruiter() {
        Ok(())
    } else {
        Err(JobUseCaseError::Forbidden)
    }
}

#[cfg(test)]
#[path = "job_use_case_test.rs"]
mod tests;
