// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::non_blank;
use crate::domain::models::session::Session;
use crate::domain::models::user::{User, UserRole};
use crate::domain::services::auth_service::Registration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// 注册请求
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequestDto {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    /// developer | recruiter
    #[validate(custom(function = "valid_role"))]
    pub role: String,
    #[validate(custom(function = "non_blank"))]
    pub bio: String,
}

fn valid_role(role: &str) -> Result<(), ValidationError> {
    UserRole::from_str(role).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("role");
        err.message = Some("must be either developer or recruiter".into());
        err
    })
}

impl TryFrom<RegisterRequestDto> for Registration {
    type Error = validator::ValidationErrors;

    fn try_from(dto: RegisterRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        // 已通过 valid_role 校验
        let role = UserRole::from_str(&dto.role).unwrap_or(UserRole::Developer);
        Ok(Registration {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role,
            bio: dto.bio,
        })
    }
}

/// 登录请求
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequestDto {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub password: String,
}

/// 访问令牌响应
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for TokenResponseDto {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.token.clone(),
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
        }
    }
}

/// 登录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub user: User,
    #[serde(flatten)]
    pub token: TokenResponseDto,
}
