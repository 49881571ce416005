// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::repositories::job_repository::RepositoryError;
use crate::domain::repositories::session_repository::SessionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// 会话仓库内存实现
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), RepositoryError> {
        self.sessions.insert(session.token.clone(), session);
        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        Ok(self.sessions.get(token).map(|session| session.clone()))
    }

    async fn revoke(&self, token: &str) -> Result<bool, RepositoryError> {
        Ok(self.sessions.remove(token).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before.saturating_sub(self.sessions.len()) as u64)
    }
}
