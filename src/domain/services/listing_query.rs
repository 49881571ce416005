// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 职位查询引擎
//!
//! 对内存中的职位集合依次执行过滤、排序和分页，得到当前可见的一页结果。
//! 引擎是纯函数：不修改输入，不产生副作用，也不会因任何输入组合而报错。

use std::cmp::Reverse;

use crate::domain::models::job::JobListing;
use crate::domain::models::query::{PagedResult, QueryParameters, SortKey, DEFAULT_PAGE_SIZE};

/// 执行一次职位查询
///
/// # 参数
///
/// * `listings` - 职位快照，可以为空
/// * `params` - 查询参数
///
/// # 返回值
///
/// 返回请求页的职位以及分页信息。页码为0时按第1页处理；
/// 超出范围的页码返回空的 `items`；没有匹配项时页码为1。
pub fn query(listings: &[JobListing], params: &QueryParameters) -> PagedResult {
    let filter = ListingFilter::new(params);
    let mut matched: Vec<&JobListing> = listings.iter().filter(|job| filter.matches(job)).collect();

    sort_listings(&mut matched, params.sort);

    paginate(&matched, params.page, params.page_size)
}

/// 预先小写化的过滤条件
struct ListingFilter<'a> {
    term: Option<String>,
    location: Option<String>,
    employment_type: Option<&'a str>,
    params: &'a QueryParameters,
}

impl<'a> ListingFilter<'a> {
    fn new(params: &'a QueryParameters) -> Self {
        Self {
            term: lowered(&params.term),
            location: lowered(&params.location),
            employment_type: Some(params.employment_type.trim()).filter(|t| !t.is_empty()),
            params,
        }
    }

    fn matches(&self, job: &JobListing) -> bool {
        self.matches_term(job)
            && self.matches_location(job)
            && self.matches_type(job)
            && self.params.remote.matches(job.is_remote)
    }

    fn matches_term(&self, job: &JobListing) -> bool {
        let Some(term) = &self.term else {
            return true;
        };
        contains_ignore_case(&job.title, term)
            || contains_ignore_case(&job.company, term)
            || job.tags.iter().any(|tag| contains_ignore_case(tag, term))
    }

    fn matches_location(&self, job: &JobListing) -> bool {
        match &self.location {
            Some(location) => contains_ignore_case(&job.location, location),
            None => true,
        }
    }

    fn matches_type(&self, job: &JobListing) -> bool {
        match self.employment_type {
            Some(employment_type) => job.employment_type == employment_type,
            None => true,
        }
    }
}

fn lowered(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// 稳定排序
///
/// 薪资排序只是尽力而为：带有结构化 `salary_max` 的职位按数值降序排在前面，
/// 其余职位按薪资展示字符串降序排列。不解析展示字符串。
fn sort_listings(matched: &mut [&JobListing], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::MostRecent => matched.sort_by_key(|job| Reverse(job.posted_at)),
        SortKey::SalaryDescending => matched.sort_by(|a, b| salary_key(b).cmp(&salary_key(a))),
    }
}

fn salary_key(job: &JobListing) -> (bool, u64, &str) {
    (
        job.salary_max.is_some(),
        job.salary_max.unwrap_or(0),
        job.salary_range.as_str(),
    )
}

fn paginate(matched: &[&JobListing], page: usize, page_size: usize) -> PagedResult {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let total_matched = matched.len();
    // 没有匹配项时总页数为0，页码固定为1
    if total_matched == 0 {
        return PagedResult::empty();
    }
    let page = page.max(1);
    let total_pages = total_matched.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items = if start >= total_matched {
        Vec::new()
    } else {
        let end = (start + page_size).min(total_matched);
        matched[start..end].iter().map(|job| (*job).clone()).collect()
    };

    PagedResult {
        items,
        total_matched,
        page,
        total_pages,
    }
}

#[cfg(test)]
#[path = "listing_query_test.rs"]
mod tests;
