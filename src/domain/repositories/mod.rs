// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据访问的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 职位仓库（job_repository）：职位的查询与生命周期管理
/// - 用户仓库（user_repository）：注册用户与凭据
/// - 会话仓库（session_repository）：访问令牌与过期清理
/// - 申请仓库（application_repository）：职位申请记录
pub mod application_repository;
pub mod job_repository;
pub mod session_repository;
pub mod user_repository;
