// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::job_repository::RepositoryError;
use crate::domain::models::user::UserRecord;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户，邮箱已存在时返回 `RepositoryError::Conflict`
    async fn create(&self, record: UserRecord) -> Result<UserRecord, RepositoryError>;
    /// 根据邮箱查找（不区分大小写）
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;
    /// 根据ID查找
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;
    /// 列出全部用户
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;
}
