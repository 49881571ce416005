// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，依赖领域层的抽象接口：
///
/// - 指标（metrics）：Prometheus 导出与应用指标记录
/// - 仓库实现（repositories）：内存实现与上游职位 API 实现
/// - 种子数据（seed）：启动时加载初始职位
pub mod metrics;
pub mod repositories;
pub mod seed;
