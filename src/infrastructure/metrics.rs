// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 安装 Prometheus 导出器并注册应用指标。未启用时不安装记录器，
/// 各处的指标宏退化为空操作。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr = match settings.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "jobboard_listing_queries_total",
        "Total number of listing queries served"
    );
    describe_histogram!(
        "jobboard_listing_matches",
        "Number of listings matched per query"
    );
    describe_counter!("jobboard_logins_total", "Login attempts by outcome");
    describe_counter!(
        "jobboard_registrations_total",
        "Total number of registered users"
    );
    describe_counter!(
        "jobboard_applications_total",
        "Total number of submitted job applications"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次职位查询
pub fn record_listing_query(total_matched: usize) {
    counter!("jobboard_listing_queries_total").increment(1);
    histogram!("jobboard_listing_matches").record(total_matched as f64);
}

/// 记录一次登录尝试
pub fn record_login(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("jobboard_logins_total", "outcome" => outcome).increment(1);
}

pub fn record_registration() {
    counter!("jobboard_registrations_total").increment(1);
}

pub fn record_application() {
    counter!("jobboard_applications_total").increment(1);
}
