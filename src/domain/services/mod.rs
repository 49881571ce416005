// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 查询引擎（listing_query）：职位的过滤、排序与分页
/// - 相似职位（similar_jobs）：基于标签和雇佣类型的相似度排序
/// - 认证服务（auth_service）：注册、登录与会话管理
pub mod auth_service;
pub mod listing_query;
pub mod similar_jobs;
