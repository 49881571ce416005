// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 职位申请请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ApplyRequestDto {
    /// 求职信
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub cover_letter: Option<String>,
    /// 简历地址
    #[validate(url(message = "must be a valid URL"))]
    pub resume_url: Option<String>,
}
