//! In-memory user store for tests.

use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc, RwLock,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{NewUser, ProfilePatch, Role, User, UserId},
    ports::outbound::UserStore,
    UserError,
};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
    next_id: Arc<AtomicI32>,
}

#[allow(dead_code)]
impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored hash for `email`, for asserting on what was persisted.
    pub fn stored_hash(&self, email: &str) -> Option<String> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken);
        }

        let now = OffsetDateTime::now_utc();
        let stored = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            email: user.email.clone(),
            phone: user.phone,
            name: user.name.clone(),
            college: user.college.clone(),
            password_hash: user.password_hash.clone(),
            role: Role::default(),
            created_at: now,
            updated_at: now,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update_profile(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<User>, UserError> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };

        patch.apply_to(user);
        user.updated_at = OffsetDateTime::now_utc();
        Ok(Some(user.clone()))
    }

    async fn set_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, UserError> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.email == email) else {
            return Ok(false);
        };

        user.password_hash = password_hash.to_string();
        user.updated_at = OffsetDateTime::now_utc();
        Ok(true)
    }

    async fn delete(&self, email: &str) -> Result<Option<User>, UserError> {
        let mut users = self.users.write().unwrap();
        let position = users.iter().position(|u| u.email == email);
        Ok(position.map(|index| users.remove(index)))
    }

    async fn count(&self) -> Result<u64, UserError> {
        Ok(self.users.read().unwrap().len() as u64)
    }

    async fn all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.read().unwrap().clone())
    }
}
