// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 职位既可以保存在内存中，也可以代理到上游职位 API；
/// 用户、会话与申请只有内存实现。
pub mod http_job_repo;
pub mod in_memory_application_repo;
pub mod in_memory_job_repo;
pub mod in_memory_session_repo;
pub mod in_memory_user_repo;
