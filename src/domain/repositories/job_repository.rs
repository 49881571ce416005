// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobId, JobListing, JobListingPatch, NewJobListing};
use crate::domain::models::query::{PagedResult, QueryParameters};
use crate::domain::services::listing_query;
use async_trait::async_trait;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 记录冲突（唯一约束）
    #[error("Conflict: {0}")]
    Conflict(String),
    /// 上游服务请求失败
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
    /// 上游地址无效
    #[error("Invalid upstream url: {0}")]
    InvalidUpstreamUrl(#[from] url::ParseError),
}

/// 职位仓库特质
///
/// 统一的职位数据访问接口。内存实现和基于HTTP的实现都满足该接口，
/// 两者的列表查询都委托给同一个查询引擎。
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 获取全部职位的快照
    async fn find_all(&self) -> Result<Vec<JobListing>, RepositoryError>;

    /// 根据ID查找职位
    async fn find_by_id(&self, id: JobId) -> Result<Option<JobListing>, RepositoryError>;

    /// 创建职位，由仓库分配ID
    async fn create(&self, job: NewJobListing) -> Result<JobListing, RepositoryError>;

    /// 部分更新职位
    ///
    /// * `Ok(None)` - 职位不存在
    async fn update(
        &self,
        id: JobId,
        patch: JobListingPatch,
    ) -> Result<Option<JobListing>, RepositoryError>;

    /// 删除职位，返回是否删除了记录
    async fn delete(&self, id: JobId) -> Result<bool, RepositoryError>;

    /// 申请人数加一
    async fn increment_applicants(&self, id: JobId) -> Result<(), RepositoryError>;

    /// 按查询参数列出职位
    async fn list_jobs(&self, params: &QueryParameters) -> Result<PagedResult, RepositoryError> {
        let listings = self.find_all().await?;
        Ok(listing_query::query(&listings, params))
    }
}
