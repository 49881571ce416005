// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 求职者
    Developer,
    /// 招聘者，可以发布和管理职位
    Recruiter,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserRole::Developer => write!(f, "developer"),
            UserRole::Recruiter => write!(f, "recruiter"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(UserRole::Developer),
            "recruiter" => Ok(UserRole::Recruiter),
            _ => Err(()),
        }
    }
}

/// 对外公开的用户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

/// 持久化的用户记录，包含凭据
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    /// HMAC-SHA256(salt, password)，十六进制
    pub password_hash: String,
    /// 每用户随机盐，十六进制
    pub salt: String,
}
