// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::UserRecord;
use crate::domain::repositories::job_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// 用户仓库内存实现
///
/// 邮箱索引保证唯一性，插入通过 `entry` 原子完成
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, UserRecord>,
    by_email: DashMap<String, Uuid>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: UserRecord) -> Result<UserRecord, RepositoryError> {
        let email = record.user.email.to_lowercase();
        match self.by_email.entry(email) {
            Entry::Occupied(entry) => Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(record.user.id);
                self.users.insert(record.user.id, record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let Some(id) = self.by_email.get(&email.to_lowercase()).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|record| record.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.get(&id).map(|record| record.clone()))
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }
}
