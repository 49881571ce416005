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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、职位数据源、上游 API、认证和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 职位查询配置
    pub listings: ListingSettings,
    /// 上游职位 API 配置
    pub upstream: UpstreamSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 职位数据源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// 进程内存，启动时从种子文件加载
    Memory,
    /// 代理到上游职位 API
    Http,
}

/// 职位查询配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ListingSettings {
    /// 数据源类型 (memory, http)
    pub source: ListingSource,
    /// 种子数据文件路径，未设置时使用内置样例数据
    pub seed_path: Option<String>,
    /// 未指定 pageSize 时的每页条数
    pub default_page_size: usize,
    /// 允许的最大每页条数
    pub max_page_size: usize,
    /// 相似职位数量
    pub similar_limit: usize,
}

/// 上游职位 API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// 上游根地址 (当 source=http 时必填)
    pub base_url: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 上游访问令牌
    pub api_token: Option<String>,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 访问令牌有效期（分钟）
    pub token_ttl_minutes: i64,
    /// 过期会话清理间隔（秒）
    pub sweep_interval_secs: u64,
}

impl AuthSettings {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出端点监听地址
    pub listen_addr: String,
}

impl MetricsSettings {
    /// 解析导出端点地址
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.listen_addr.parse()
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 和 `JOBBOARD__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load(&env)
    }

    /// 按指定环境名加载配置
    pub fn load(environment: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("listings.source", "memory")?
            .set_default("listings.default_page_size", 10)?
            .set_default("listings.max_page_size", 100)?
            .set_default("listings.similar_limit", 4)?
            .set_default("upstream.timeout_secs", 10)?
            .set_default("auth.token_ttl_minutes", 1440)?
            .set_default("auth.sweep_interval_secs", 300)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(Environment::with_prefix("JOBBOARD").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.listings.max_page_size == 0 {
            return Err(ConfigError::Message(
                "listings.max_page_size must be positive".to_string(),
            ));
        }
        if self.listings.default_page_size == 0
            || self.listings.default_page_size > self.listings.max_page_size
        {
            return Err(ConfigError::Message(format!(
                "listings.default_page_size must be within 1..={}",
                self.listings.max_page_size
            )));
        }
        if self.listings.source == ListingSource::Http && self.upstream.base_url.is_none() {
            return Err(ConfigError::Message(
                "upstream.base_url is required when listings.source = \"http\"".to_string(),
            ));
        }
        if self.auth.token_ttl_minutes <= 0 {
            return Err(ConfigError::Message(
                "auth.token_ttl_minutes must be positive".to_string(),
            ));
        }
        if self.metrics.enabled {
            if let Err(e) = self.metrics.socket_addr() {
                return Err(ConfigError::Message(format!(
                    "metrics.listen_addr {:?} is not a socket address: {}",
                    self.metrics.listen_addr, e
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
