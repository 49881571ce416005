// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_tests;
pub mod auth_tests;
pub mod helpers;
pub mod http_job_repo_test;
