// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::job_repository::RepositoryError;
use crate::domain::models::application::JobApplication;
use crate::domain::models::job::JobId;
use async_trait::async_trait;
use uuid::Uuid;

/// 申请仓库特质
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// 保存申请；同一用户对同一职位重复申请时返回 `RepositoryError::Conflict`
    async fn create(&self, application: JobApplication) -> Result<JobApplication, RepositoryError>;
    /// 列出某用户的申请，按提交时间倒序
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<JobApplication>, RepositoryError>;
    /// 撤销申请，返回是否删除了记录
    async fn delete(&self, job_id: JobId, user_id: Uuid) -> Result<bool, RepositoryError>;
}
