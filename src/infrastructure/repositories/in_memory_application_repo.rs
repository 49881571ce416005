// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::application::JobApplication;
use crate::domain::models::job::JobId;
use crate::domain::repositories::application_repository::ApplicationRepository;
use crate::domain::repositories::job_repository::RepositoryError;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// 申请仓库内存实现，以 (职位, 用户) 为键保证唯一
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    applications: DashMap<(JobId, Uuid), JobApplication>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(&self, application: JobApplication) -> Result<JobApplication, RepositoryError> {
        match self
            .applications
            .entry((application.job_id, application.user_id))
        {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(format!(
                "user {} already applied to job {}",
                application.user_id, application.job_id
            ))),
            Entry::Vacant(entry) => {
                entry.insert(application.clone());
                Ok(application)
            }
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut applications: Vec<JobApplication> = self
            .applications
            .iter()
            .filter(|entry| entry.key().1 == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(applications)
    }

    async fn delete(&self, job_id: JobId, user_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.applications.remove(&(job_id, user_id)).is_some())
    }
}
