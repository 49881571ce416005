// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{non_blank, nullable};
use crate::domain::models::job::{JobListingPatch, ListingPriority, ListingStatus, NewJobListing};
use crate::domain::models::query::{QueryParameters, RemoteFilter, SortKey};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

/// 职位列表查询参数
///
/// 所有字段都是可选的，无法识别的 `remote` 与 `sort` 取值按默认处理
#[derive(Debug, Default, Deserialize)]
pub struct JobQueryRequestDto {
    /// 关键词
    pub term: Option<String>,
    /// 地点
    pub location: Option<String>,
    /// 雇佣类型
    #[serde(rename = "type", alias = "employmentType")]
    pub employment_type: Option<String>,
    /// any | remote | on-site
    pub remote: Option<String>,
    /// relevance | mostRecent | salaryDescending
    pub sort: Option<String>,
    /// 页码，从1开始
    pub page: Option<usize>,
    /// 每页条数
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<usize>,
}

impl JobQueryRequestDto {
    /// 转换为查询参数
    ///
    /// # 参数
    ///
    /// * `default_page_size` - 未指定 `pageSize` 时使用的每页条数
    pub fn into_query_parameters(self, default_page_size: usize) -> QueryParameters {
        QueryParameters {
            term: self.term.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            employment_type: self.employment_type.unwrap_or_default(),
            remote: self
                .remote
                .as_deref()
                .map(RemoteFilter::parse_lenient)
                .unwrap_or_default(),
            sort: self
                .sort
                .as_deref()
                .map(SortKey::parse_lenient)
                .unwrap_or_default(),
            page: self.page.unwrap_or(1).max(1),
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

/// 创建职位请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequestDto {
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    #[validate(custom(function = "non_blank"))]
    pub company: String,
    #[validate(custom(function = "non_blank"))]
    pub location: String,
    #[serde(alias = "type")]
    #[validate(custom(function = "non_blank"))]
    pub employment_type: String,
    #[serde(default, alias = "remote")]
    pub is_remote: bool,
    #[serde(alias = "salary")]
    #[validate(custom(function = "non_blank"))]
    pub salary_range: String,
    pub salary_max: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 发布日期，缺省为当天
    #[serde(alias = "postedDate")]
    pub posted_at: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub status: Option<ListingStatus>,
    pub priority: Option<ListingPriority>,
    #[validate(url)]
    pub company_logo: Option<String>,
}

impl From<CreateJobRequestDto> for NewJobListing {
    fn from(dto: CreateJobRequestDto) -> Self {
        NewJobListing {
            title: dto.title.trim().to_string(),
            company: dto.company.trim().to_string(),
            location: dto.location.trim().to_string(),
            employment_type: dto.employment_type.trim().to_string(),
            is_remote: dto.is_remote,
            salary_range: dto.salary_range.trim().to_string(),
            salary_max: dto.salary_max,
            tags: clean_list(dto.tags),
            posted_at: dto.posted_at.unwrap_or_else(|| Utc::now().date_naive()),
            description: dto.description,
            responsibilities: clean_list(dto.responsibilities),
            requirements: clean_list(dto.requirements),
            status: dto.status.unwrap_or_default(),
            priority: dto.priority.unwrap_or_default(),
            company_logo: dto.company_logo,
        }
    }
}

/// 更新职位请求，仅更新出现的字段
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequestDto {
    #[validate(custom(function = "non_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub company: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub location: Option<String>,
    #[serde(alias = "type")]
    #[validate(custom(function = "non_blank"))]
    pub employment_type: Option<String>,
    #[serde(alias = "remote")]
    pub is_remote: Option<bool>,
    #[serde(alias = "salary")]
    #[validate(custom(function = "non_blank"))]
    pub salary_range: Option<String>,
    /// `null` 清空结构化薪资
    #[serde(default, deserialize_with = "nullable")]
    pub salary_max: Option<Option<u64>>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<ListingStatus>,
    pub priority: Option<ListingPriority>,
    /// `null` 移除公司标志
    #[serde(default, deserialize_with = "nullable")]
    #[validate(url)]
    pub company_logo: Option<Option<String>>,
}

impl From<UpdateJobRequestDto> for JobListingPatch {
    fn from(dto: UpdateJobRequestDto) -> Self {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());
        JobListingPatch {
            title: trimmed(dto.title),
            company: trimmed(dto.company),
            location: trimmed(dto.location),
            employment_type: trimmed(dto.employment_type),
            is_remote: dto.is_remote,
            salary_range: trimmed(dto.salary_range),
            salary_max: dto.salary_max,
            tags: dto.tags.map(clean_list),
            description: dto.description,
            responsibilities: dto.responsibilities.map(clean_list),
            requirements: dto.requirements.map(clean_list),
            status: dto.status,
            priority: dto.priority,
            company_logo: dto.company_logo,
        }
    }
}

/// 去除空白项
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
