// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::auth_service::AuthService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// 过期会话清理工作器
///
/// 负责定期清理已过期的访问令牌
pub struct SessionSweeper {
    auth_service: Arc<AuthService>,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(auth_service: Arc<AuthService>, interval: Duration) -> Self {
        Self {
            auth_service,
            interval,
        }
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            "Session sweeper started, interval {}s",
            self.interval.as_secs()
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.auth_service.purge_expired_sessions().await {
                Ok(0) => debug!("No expired sessions"),
                Ok(count) => info!("Purged {} expired sessions", count),
                Err(e) => error!("Failed to purge expired sessions: {}", e),
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }
}
