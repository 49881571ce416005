// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::job::JobListing;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 远程办公过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteFilter {
    /// 不限
    #[default]
    Any,
    /// 仅远程
    Remote,
    /// 仅现场办公
    OnSite,
}

impl RemoteFilter {
    /// 从原始输入解析，无法识别的值视为不限
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    pub fn matches(self, is_remote: bool) -> bool {
        match self {
            RemoteFilter::Any => true,
            RemoteFilter::Remote => is_remote,
            RemoteFilter::OnSite => !is_remote,
        }
    }
}

impl fmt::Display for RemoteFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemoteFilter::Any => write!(f, "any"),
            RemoteFilter::Remote => write!(f, "remote"),
            RemoteFilter::OnSite => write!(f, "on-site"),
        }
    }
}

impl FromStr for RemoteFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(RemoteFilter::Any),
            "remote" => Ok(RemoteFilter::Remote),
            "on-site" => Ok(RemoteFilter::OnSite),
            _ => Err(()),
        }
    }
}

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// 相关度（保持输入顺序，没有打分模型）
    #[default]
    Relevance,
    /// 最新发布优先
    MostRecent,
    /// 薪资从高到低（尽力而为）
    SalaryDescending,
}

impl SortKey {
    /// 从原始输入解析，无法识别的值视为不排序
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortKey::Relevance => write!(f, "relevance"),
            SortKey::MostRecent => write!(f, "mostRecent"),
            SortKey::SalaryDescending => write!(f, "salaryDescending"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ();

    /// 接受 camelCase、snake_case 与 kebab-case 写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "mostrecent" => Ok(SortKey::MostRecent),
            "salarydescending" => Ok(SortKey::SalaryDescending),
            _ => Err(()),
        }
    }
}

/// 职位查询参数
///
/// 每次用户交互时重新构建。空字符串表示该条件不参与过滤。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    /// 关键词，匹配标题、公司或任一标签（不区分大小写）
    pub term: String,
    /// 地点子串（不区分大小写）
    pub location: String,
    /// 雇佣类型（精确匹配）
    pub employment_type: String,
    /// 远程过滤
    pub remote: RemoteFilter,
    /// 排序方式
    pub sort: SortKey,
    /// 页码，从1开始
    pub page: usize,
    /// 每页条数
    pub page_size: usize,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            term: String::new(),
            location: String::new(),
            employment_type: String::new(),
            remote: RemoteFilter::Any,
            sort: SortKey::Relevance,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = employment_type.into();
        self
    }

    pub fn with_remote(mut self, remote: RemoteFilter) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// 分页查询结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T = JobListing> {
    /// 当前页的条目
    pub items: Vec<T>,
    /// 过滤后的总条数
    pub total_matched: usize,
    /// 当前页码
    pub page: usize,
    /// 总页数
    pub total_pages: usize,
}

impl<T> PagedResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_matched: 0,
            page: 1,
            total_pages: 0,
        }
    }
}
