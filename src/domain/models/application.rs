// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::job::JobId;

/// 职位申请
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: JobId,
    pub user_id: Uuid,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn new(
        job_id: JobId,
        user_id: Uuid,
        cover_letter: Option<String>,
        resume_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            user_id,
            cover_letter,
            resume_url,
            submitted_at: Utc::now(),
        }
    }
}
