// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::apply_use_case::ApplyUseCase;
use crate::application::use_cases::job_use_case::JobUseCase;
use crate::config::settings::ListingSettings;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::services::auth_service::AuthService;
use crate::infrastructure::repositories::in_memory_application_repo::InMemoryApplicationRepository;
use crate::infrastructure::repositories::in_memory_session_repo::InMemorySessionRepository;
use crate::infrastructure::repositories::in_memory_user_repo::InMemoryUserRepository;
use crate::presentation::handlers::{application_handler, auth_handler, job_handler, user_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由所需的服务集合
#[derive(Clone)]
pub struct AppServices {
    pub job_use_case: Arc<JobUseCase>,
    pub apply_use_case: Arc<ApplyUseCase>,
    pub auth_service: Arc<AuthService>,
}

impl AppServices {
    /// 组装服务
    ///
    /// 职位仓库由调用方决定；用户、会话与申请使用内存仓库
    ///
    /// # 参数
    ///
    /// * `job_repo` - 职位仓库
    /// * `listings` - 职位查询配置
    /// * `token_ttl` - 访问令牌有效期
    pub fn new(
        job_repo: Arc<dyn JobRepository>,
        listings: ListingSettings,
        token_ttl: chrono::Duration,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            token_ttl,
        ));
        let apply_use_case = Arc::new(ApplyUseCase::new(
            job_repo.clone(),
            Arc::new(InMemoryApplicationRepository::new()),
        ));
        let job_use_case = Arc::new(JobUseCase::new(job_repo, listings));

        Self {
            job_use_case,
            apply_use_case,
            auth_service,
        }
    }
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let service_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let job_routes = Router::new()
        .route(
            "/api/jobs",
            get(job_handler::list_jobs).post(job_handler::create_job),
        )
        .route(
            "/api/jobs/{id}",
            get(job_handler::get_job)
                .put(job_handler::update_job)
                .delete(job_handler::delete_job),
        )
        .route("/api/jobs/{id}/similar", get(job_handler::similar_jobs))
        .route("/api/jobs/{id}/apply", post(application_handler::apply))
        .route(
            "/api/applications",
            get(application_handler::my_applications),
        );

    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth_handler::register))
        .route("/api/auth/login", post(auth_handler::login))
        .route("/api/auth/logout", post(auth_handler::logout))
        .route("/api/auth/refresh", post(auth_handler::refresh))
        .route("/api/user/profile", get(auth_handler::profile))
        .route("/api/profile/{user_id}", get(user_handler::get_user))
        .route(
            "/api/users",
            get(user_handler::list_users).post(auth_handler::register),
        )
        .route("/api/users/{id}", get(user_handler::get_user));

    Router::new()
        .merge(service_routes)
        .merge(job_routes)
        .merge(auth_routes)
}

/// 创建完整的应用
///
/// 在路由之上挂载认证中间件、服务扩展与请求追踪
pub fn app(services: AppServices) -> Router {
    routes()
        .layer(middleware::from_fn_with_state(
            AuthState {
                auth_service: services.auth_service.clone(),
            },
            auth_middleware,
        ))
        .layer(Extension(services.job_use_case))
        .layer(Extension(services.apply_use_case))
        .layer(Extension(services.auth_service))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
