// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobId, JobListing, JobListingPatch, NewJobListing};
use crate::domain::repositories::job_repository::{JobRepository, RepositoryError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 职位仓库内存实现
///
/// 职位集合以写时复制的方式保存：读取方拿到 `Arc` 快照，
/// 写入不会影响已经拿到快照的查询。
pub struct InMemoryJobRepository {
    listings: RwLock<Arc<Vec<JobListing>>>,
    next_id: AtomicU64,
}

impl InMemoryJobRepository {
    /// 使用初始职位创建仓库
    ///
    /// # 参数
    ///
    /// * `seed` - 初始职位，新职位的ID从其中最大ID之后开始分配
    pub fn new(seed: Vec<JobListing>) -> Self {
        let next_id = seed.iter().map(|job| job.id).max().unwrap_or(0) + 1;
        Self {
            listings: RwLock::new(Arc::new(seed)),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// 当前职位集合的快照
    pub fn snapshot(&self) -> Arc<Vec<JobListing>> {
        self.listings.read().clone()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut Vec<JobListing>) -> R) -> R {
        let mut guard = self.listings.write();
        f(Arc::make_mut(&mut guard))
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(self.snapshot().as_ref().clone())
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<JobListing>, RepositoryError> {
        Ok(self.snapshot().iter().find(|job| job.id == id).cloned())
    }

    async fn create(&self, job: NewJobListing) -> Result<JobListing, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let listing = job.into_listing(id);
        self.modify(|listings| listings.push(listing.clone()));
        Ok(listing)
    }

    async fn update(
        &self,
        id: JobId,
        patch: JobListingPatch,
    ) -> Result<Option<JobListing>, RepositoryError> {
        Ok(self.modify(|listings| {
            listings.iter_mut().find(|job| job.id == id).map(|job| {
                patch.apply(job);
                job.clone()
            })
        }))
    }

    async fn delete(&self, id: JobId) -> Result<bool, RepositoryError> {
        Ok(self.modify(|listings| {
            let before = listings.len();
            listings.retain(|job| job.id != id);
            listings.len() != before
        }))
    }

    async fn increment_applicants(&self, id: JobId) -> Result<(), RepositoryError> {
        self.modify(|listings| {
            let job = listings
                .iter_mut()
                .find(|job| job.id == id)
                .ok_or(RepositoryError::NotFound)?;
            job.applicant_count = job.applicant_count.saturating_add(1);
            Ok(())
        })
    }
}
