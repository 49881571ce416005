// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 职位ID
pub type JobId = u64;

/// 标签预览默认显示数量
pub const DEFAULT_TAG_PREVIEW: usize = 4;

/// 职位实体
///
/// 表示一条招聘信息。职位由外部数据源提供并拥有其生命周期，
/// 查询引擎只读取职位，从不修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// 职位唯一标识符
    pub id: JobId,
    /// 职位名称
    pub title: String,
    /// 公司名称
    pub company: String,
    /// 工作地点
    pub location: String,
    /// 雇佣类型，如 "Full-time"、"Contract"
    #[serde(alias = "type")]
    pub employment_type: String,
    /// 是否远程
    #[serde(alias = "remote")]
    pub is_remote: bool,
    /// 薪资范围（展示字符串）
    #[serde(alias = "salary")]
    pub salary_range: String,
    /// 结构化的薪资上限，可选
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    /// 标签，按插入顺序展示
    #[serde(default)]
    pub tags: Vec<String>,
    /// 发布日期
    #[serde(alias = "postedDate")]
    pub posted_at: NaiveDate,
    /// 申请人数
    #[serde(default)]
    pub applicant_count: u32,
    /// 职位描述
    #[serde(default)]
    pub description: String,
    /// 工作职责
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// 任职要求
    #[serde(default)]
    pub requirements: Vec<String>,
    /// 发布状态
    #[serde(default)]
    pub status: ListingStatus,
    /// 优先级
    #[serde(default)]
    pub priority: ListingPriority,
    /// 公司 Logo 地址
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
}

/// 职位发布状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    /// 招聘中
    Active,
    /// 即将截止
    ClosingSoon,
    /// 开放
    #[default]
    Open,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListingStatus::Active => write!(f, "active"),
            ListingStatus::ClosingSoon => write!(f, "closing-soon"),
            ListingStatus::Open => write!(f, "open"),
        }
    }
}

/// 职位优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingPriority {
    #[default]
    Normal,
    Urgent,
}

/// 标签预览
///
/// 列表卡片只展示前几个标签，其余以 "+N more" 形式显示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPreview<'a> {
    pub visible: &'a [String],
    pub hidden_count: usize,
}

impl JobListing {
    /// 状态徽章文本
    ///
    /// 紧急职位优先显示 "Urgent"，否则按发布状态显示
    pub fn status_label(&self) -> &'static str {
        if self.priority == ListingPriority::Urgent {
            return "Urgent";
        }
        match self.status {
            ListingStatus::Active => "Active",
            ListingStatus::ClosingSoon => "Closing Soon",
            ListingStatus::Open => "Open",
        }
    }

    /// 返回前 `limit` 个标签以及被隐藏的标签数量
    pub fn tag_preview(&self, limit: usize) -> TagPreview<'_> {
        let shown = self.tags.len().min(limit);
        TagPreview {
            visible: &self.tags[..shown],
            hidden_count: self.tags.len() - shown,
        }
    }
}

/// 新建职位
///
/// 由仓库分配ID，申请人数从0开始
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub is_remote: bool,
    pub salary_range: String,
    pub salary_max: Option<u64>,
    pub tags: Vec<String>,
    pub posted_at: NaiveDate,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub status: ListingStatus,
    pub priority: ListingPriority,
    pub company_logo: Option<String>,
}

impl NewJobListing {
    /// 使用给定ID构造职位实体
    pub fn into_listing(self, id: JobId) -> JobListing {
        JobListing {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            employment_type: self.employment_type,
            is_remote: self.is_remote,
            salary_range: self.salary_range,
            salary_max: self.salary_max,
            tags: self.tags,
            posted_at: self.posted_at,
            applicant_count: 0,
            description: self.description,
            responsibilities: self.responsibilities,
            requirements: self.requirements,
            status: self.status,
            priority: self.priority,
            company_logo: self.company_logo,
        }
    }
}

/// 职位部分更新
///
/// 仅覆盖 `Some` 字段。`salary_max` 与 `company_logo` 可以清空，
/// `Some(None)` 表示清空该字段。
#[derive(Debug, Clone, Default)]
pub struct JobListingPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub is_remote: Option<bool>,
    pub salary_range: Option<String>,
    pub salary_max: Option<Option<u64>>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<ListingStatus>,
    pub priority: Option<ListingPriority>,
    pub company_logo: Option<Option<String>>,
}

impl JobListingPatch {
    /// 将更新应用到职位上
    pub fn apply(self, job: &mut JobListing) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(employment_type) = self.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(is_remote) = self.is_remote {
            job.is_remote = is_remote;
        }
        if let Some(salary_range) = self.salary_range {
            job.salary_range = salary_range;
        }
        if let Some(salary_max) = self.salary_max {
            job.salary_max = salary_max;
        }
        if let Some(tags) = self.tags {
            job.tags = tags;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(responsibilities) = self.responsibilities {
            job.responsibilities = responsibilities;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(priority) = self.priority {
            job.priority = priority;
        }
        if let Some(company_logo) = self.company_logo {
            job.company_logo = company_logo;
        }
    }
}
