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

use anyhow::Context;
use jobboard::config::settings::{ListingSource, Settings};
use jobboard::domain::repositories::job_repository::JobRepository;
use jobboard::infrastructure::repositories::http_job_repo::HttpJobRepository;
use jobboard::infrastructure::repositories::in_memory_job_repo::InMemoryJobRepository;
use jobboard::infrastructure::{metrics, seed};
use jobboard::presentation::routes::{self, AppServices};
use jobboard::utils::telemetry;
use jobboard::workers::session_sweeper::SessionSweeper;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobboard...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Listing source
    let job_repo: Arc<dyn JobRepository> = match settings.listings.source {
        ListingSource::Memory => {
            let listings = seed::load_listings(settings.listings.seed_path.as_deref()).await?;
            Arc::new(InMemoryJobRepository::new(listings))
        }
        ListingSource::Http => {
            let base_url = settings
                .upstream
                .base_url
                .as_deref()
                .context("upstream.base_url is not configured")?;
            info!("Proxying listings to {}", base_url);
            Arc::new(HttpJobRepository::new(
                base_url,
                settings.upstream.timeout(),
                settings.upstream.api_token.clone(),
            )?)
        }
    };

    let services = AppServices::new(
        job_repo,
        settings.listings.clone(),
        settings.auth.token_ttl(),
    );

    // 4. Background workers
    let sweeper = SessionSweeper::new(
        services.auth_service.clone(),
        settings.auth.sweep_interval(),
    )
    .start();

    // 5. Serve
    let app = routes::app(services);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
