// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::job_repository::RepositoryError;
use crate::domain::models::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// 会话仓库特质
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 保存会话
    async fn insert(&self, session: Session) -> Result<(), RepositoryError>;
    /// 根据令牌查找会话
    async fn find(&self, token: &str) -> Result<Option<Session>, RepositoryError>;
    /// 吊销令牌，返回令牌是否存在
    async fn revoke(&self, token: &str) -> Result<bool, RepositoryError>;
    /// 清理在 `now` 之前过期的会话，返回清理数量
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
