// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 请求与响应的结构，以及请求字段的校验规则
pub mod application_request;
pub mod auth_request;
pub mod job_request;

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// 校验字符串去除首尾空白后非空
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// 区分缺失字段与显式 `null`：缺失时为 `None`，`null` 时为 `Some(None)`
///
/// 需要与 `#[serde(default)]` 一起使用
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
