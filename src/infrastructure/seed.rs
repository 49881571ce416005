// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobListing;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use tracing::info;

/// 内置样例职位
const BUNDLED_LISTINGS: &str = include_str!("../../data/sample_jobs.json");

/// 加载初始职位
///
/// # 参数
///
/// * `seed_path` - JSON 文件路径，未设置时使用内置样例数据
///
/// # 返回值
///
/// * `Err` - 文件无法读取、JSON 无法解析或存在重复ID
pub async fn load_listings(seed_path: Option<&str>) -> Result<Vec<JobListing>> {
    let listings = match seed_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read seed file {}", path))?;
            let listings = parse_listings(&raw).with_context(|| format!("invalid seed file {}", path))?;
            info!("Loaded {} listings from {}", listings.len(), path);
            listings
        }
        None => {
            let listings = parse_listings(BUNDLED_LISTINGS)?;
            info!("Loaded {} bundled sample listings", listings.len());
            listings
        }
    };
    Ok(listings)
}

fn parse_listings(raw: &str) -> Result<Vec<JobListing>> {
    let listings: Vec<JobListing> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(listings.len());
    for job in &listings {
        if !seen.insert(job.id) {
            bail!("duplicate listing id {}", job.id);
        }
    }
    Ok(listings)
}
