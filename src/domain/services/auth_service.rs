// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::models::user::{User, UserRecord, UserRole};
use crate::domain::repositories::job_repository::RepositoryError;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::user_repository::UserRepository;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// 认证错误类型
#[derive(Error, Debug)]
pub enum AuthError {
    /// 邮箱或密码错误
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// 邮箱已被注册
    #[error("Email is already registered")]
    EmailTaken,
    /// 令牌无效
    #[error("Invalid access token")]
    InvalidToken,
    /// 会话已过期
    #[error("Session expired")]
    SessionExpired,
    /// 用户不存在
    #[error("User not found")]
    UserNotFound,
    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => AuthError::EmailTaken,
            other => AuthError::Repository(other),
        }
    }
}

/// 注册信息
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub bio: String,
}

/// 认证服务
///
/// 负责注册、登录、令牌签发与校验。密码以每用户随机盐为密钥做
/// HMAC-SHA256 后保存，校验为常量时间比较。
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    token_ttl: Duration,
}

impl AuthService {
    /// 创建新的认证服务实例
    ///
    /// # 参数
    ///
    /// * `users` - 用户仓库
    /// * `sessions` - 会话仓库
    /// * `token_ttl` - 令牌有效期
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            token_ttl,
        }
    }

    /// 注册新用户
    pub async fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let salt: [u8; 16] = rand::random();
        let password_hash = hash_password(&salt, &registration.password)?;

        let record = UserRecord {
            user: User {
                id: Uuid::new_v4(),
                name: registration.name.trim().to_string(),
                email: normalize_email(&registration.email),
                role: registration.role,
                bio: registration.bio.trim().to_string(),
                created_at: Utc::now(),
            },
            password_hash,
            salt: hex::encode(salt),
        };

        let created = self.users.create(record).await?;
        info!("Registered user {} ({})", created.user.id, created.user.role);
        Ok(created.user)
    }

    /// 登录并签发会话
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, Session), AuthError> {
        let Some(record) = self.users.find_by_email(&normalize_email(email)).await? else {
            warn!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(&record, password)? {
            warn!("Login attempt with wrong password for user {}", record.user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.issue(&record.user).await?;
        info!("User {} logged in", record.user.id);
        Ok((record.user, session))
    }

    /// 校验访问令牌
    ///
    /// 过期的会话会被立即吊销
    pub async fn authenticate(&self, token: &str) -> Result<Session, AuthError> {
        let session = self
            .sessions
            .find(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if session.is_expired_at(Utc::now()) {
            debug!("Session for user {} expired", session.user_id);
            self.sessions.revoke(token).await?;
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }

    /// 注销会话
    pub async fn logout(&self, session: &Session) -> Result<(), AuthError> {
        self.sessions.revoke(&session.token).await?;
        info!("User {} logged out", session.user_id);
        Ok(())
    }

    /// 刷新令牌：签发新会话并吊销旧令牌
    pub async fn refresh(&self, session: &Session) -> Result<Session, AuthError> {
        let user = self.profile(session.user_id).await?;
        let fresh = self.issue(&user).await?;
        self.sessions.revoke(&session.token).await?;
        debug!("Refreshed session for user {}", user.id);
        Ok(fresh)
    }

    /// 获取用户资料
    pub async fn profile(&self, user_id: Uuid) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|record| record.user)
            .ok_or(AuthError::UserNotFound)
    }

    /// 列出全部用户的公开信息
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let mut users: Vec<User> = self
            .users
            .find_all()
            .await?
            .into_iter()
            .map(|record| record.user)
            .collect();
        users.sort_by_key(|user| user.created_at);
        Ok(users)
    }

    /// 清理过期会话
    pub async fn purge_expired_sessions(&self) -> Result<u64, AuthError> {
        Ok(self.sessions.purge_expired(Utc::now()).await?)
    }

    async fn issue(&self, user: &User) -> Result<Session, AuthError> {
        let token_bytes: [u8; 32] = rand::random();
        let now = Utc::now();
        let session = Session {
            token: URL_SAFE_NO_PAD.encode(token_bytes),
            user_id: user.id,
            role: user.role,
            issued_at: now,
            expires_at: now + self.token_ttl,
        };
        self.sessions.insert(session.clone()).await?;
        Ok(session)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(salt: &[u8], password: &str) -> Result<String, AuthError> {
    let mut mac =
        HmacSha256::new_from_slice(salt).map_err(|e| AuthError::Internal(e.to_string()))?;
    mac.update(password.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn verify_password(record: &UserRecord, password: &str) -> Result<bool, AuthError> {
    let salt = hex::decode(&record.salt).map_err(|e| AuthError::Internal(e.to_string()))?;
    let expected =
        hex::decode(&record.password_hash).map_err(|e| AuthError::Internal(e.to_string()))?;

    let mut mac =
        HmacSha256::new_from_slice(&salt).map_err(|e| AuthError::Internal(e.to_string()))?;
    mac.update(password.as_bytes());
    Ok(mac.verify_slice(&expected).is_ok())
}

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod tests;
