// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobId, JobListing, JobListingPatch, NewJobListing};
use crate::domain::repositories::job_repository::{JobRepository, RepositoryError};
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::{Method, RequestBuilder, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

/// 基于上游职位 API 的仓库实现
///
/// 上游接口约定：
/// - `GET /jobs` 返回全部职位
/// - `GET /jobs/{id}` 返回单个职位，不存在时返回 404
/// - `POST /jobs` 创建职位并返回创建结果
/// - `PUT /jobs/{id}` 以完整职位替换
/// - `DELETE /jobs/{id}` 删除职位
///
/// 上游只支持整体替换，更新和计数都是先读后写。同一进程内对同一职位的
/// 读写按职位串行；多个实例共用一个上游时仍可能丢失并发计数。
pub struct HttpJobRepository {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 上游根地址，总是以 `/` 结尾
    base_url: Url,
    /// 可选的上游访问令牌
    api_token: Option<String>,
    /// 按职位划分的写锁
    write_locks: DashMap<JobId, Arc<Mutex<()>>>,
}

impl HttpJobRepository {
    /// 创建新的上游仓库
    ///
    /// # 参数
    ///
    /// * `base_url` - 上游 API 根地址，如 `https://jobs.example.com/api`
    /// * `timeout` - 单次请求超时
    /// * `api_token` - 可选的 Bearer 令牌
    ///
    /// # 返回值
    ///
    /// * `Err(RepositoryError::InvalidUpstreamUrl)` - 地址无法解析
    pub fn new(
        base_url: &str,
        timeout: Duration,
        api_token: Option<String>,
    ) -> Result<Self, RepositoryError> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_token: api_token.filter(|token| !token.is_empty()),
            write_locks: DashMap::new(),
        })
    }

    fn write_lock(&self, id: JobId) -> Arc<Mutex<()>> {
        self.write_locks.entry(id).or_default().clone()
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, RepositoryError> {
        let url = self.base_url.join(path)?;
        debug!("Upstream {} {}", method, url);
        let builder = self.client.request(method, url);
        Ok(match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn put(&self, job: &JobListing) -> Result<JobListing, RepositoryError> {
        let response = self
            .request(Method::PUT, &format!("jobs/{}", job.id))?
            .json(job)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobRepository for HttpJobRepository {
    async fn find_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        let response = self
            .request(Method::GET, "jobs")?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<JobListing>, RepositoryError> {
        let response = self
            .request(Method::GET, &format!("jobs/{}", id))?
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?.json().await?))
    }

    async fn create(&self, job: NewJobListing) -> Result<JobListing, RepositoryError> {
        let response = self
            .request(Method::POST, "jobs")?
            .json(&job)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn update(
        &self,
        id: JobId,
        patch: JobListingPatch,
    ) -> Result<Option<JobListing>, RepositoryError> {
        let lock = self.write_lock(id);
        let _guard = lock.lock().await;

        let Some(mut job) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut job);
        Ok(Some(self.put(&job).await?))
    }

    async fn delete(&self, id: JobId) -> Result<bool, RepositoryError> {
        self.write_locks.remove(&id);
        let response = self
            .request(Method::DELETE, &format!("jobs/{}", id))?
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.error_for_status()?;
        Ok(true)
    }

    async fn increment_applicants(&self, id: JobId) -> Result<(), RepositoryError> {
        let lock = self.write_lock(id);
        let _guard = lock.lock().await;

        let mut job = self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
        job.applicant_count = job.applicant_count.saturating_add(1);
        self.put(&job).await?;
        Ok(())
    }
}
