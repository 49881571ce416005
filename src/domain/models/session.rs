// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::user::UserRole;

/// 登录会话
///
/// 认证中间件在请求边界解析出会话并显式传递给处理器，
/// 不存在全局的“当前用户”。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    /// 访问令牌
    #[serde(skip)]
    pub token: String,
    pub user_id: Uuid,
    pub role: UserRole,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_recruiter(&self) -> bool {
        self.role == UserRole::Recruiter
    }
}
