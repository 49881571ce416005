// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求数据传输对象和职位、申请用例
/// 认证流程直接由领域层的认证服务承担
pub mod dto;
pub mod use_cases;
