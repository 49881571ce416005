// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求数据传输对象和用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位、用户与会话实体，查询引擎和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供仓库实现、种子数据加载和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 工具模块
pub mod utils;

/// 工作器模块
///
/// 实现后台任务
pub mod workers;
