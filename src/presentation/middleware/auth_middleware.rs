// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::services::auth_service::{AuthError, AuthService};
use crate::presentation::errors::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 认证服务
    pub auth_service: Arc<AuthService>,
}

/// 认证中间件
///
/// 解析请求中的 Bearer 令牌并把会话放入请求扩展。没有令牌的请求
/// 原样放行，由需要登录的处理器通过 `CurrentSession` 拒绝；
/// 携带了无效或过期令牌的请求直接返回 401。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 后续处理的响应
/// * `Err(AppError)` - 令牌无效
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match req.headers().get(header::AUTHORIZATION) {
        None => return Ok(next.run(req).await),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    };

    let Some(token) = token else {
        debug!("Malformed Authorization header on {}", req.uri().path());
        return Err(AuthError::InvalidToken.into());
    };

    let session = state.auth_service.authenticate(&token).await?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

#[cfg(test)]
#[path = "auth_middleware_test.rs"]
mod tests;
