// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：职位、查询参数、用户、会话和申请
/// - 仓库接口（repositories）：数据访问抽象接口
/// - 服务（services）：查询引擎、相似职位和认证
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod repositories;
pub mod services;
