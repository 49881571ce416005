// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 职位（job）：一条招聘信息
/// - 查询（query）：职位检索参数与分页结果
/// - 用户（user）：注册用户及其角色
/// - 会话（session）：登录后的访问令牌
/// - 申请（application）：用户对职位的申请记录
pub mod application;
pub mod job;
pub mod query;
pub mod session;
pub mod user;
