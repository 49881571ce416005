// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use crate::domain::models::job::JobListing;

/// 相似职位默认数量
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// 查找与目标职位相似的职位
///
/// 每个共同标签（不区分大小写）计2分，雇佣类型相同再加1分。
/// 只保留得分为正的职位，按得分稳定降序，最多返回 `limit` 条。
pub fn similar_jobs(listings: &[JobListing], target: &JobListing, limit: usize) -> Vec<JobListing> {
    let target_tags: HashSet<String> = target.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut scored: Vec<(usize, &JobListing)> = listings
        .iter()
        .filter(|job| job.id != target.id)
        .map(|job| (similarity(job, target, &target_tags), job))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, job)| job.clone())
        .collect()
}

fn similarity(job: &JobListing, target: &JobListing, target_tags: &HashSet<String>) -> usize {
    let shared = job
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<HashSet<_>>()
        .intersection(target_tags)
        .count();
    let same_type = usize::from(job.employment_type == target.employment_type);
    shared * 2 + same_type
}
