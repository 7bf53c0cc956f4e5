use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, ProfilePatch, User},
    UserError,
};

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Fails with [`UserError::EmailTaken`] when the email is already registered.
    async fn insert(&self, user: &NewUser) -> Result<User, UserError>;

    async fn update_profile(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<User>, UserError>;

    /// Returns false when no user has this email.
    async fn set_password_hash(&self, email: &str, password_hash: &str)
        -> Result<bool, UserError>;

    async fn delete(&self, email: &str) -> Result<Option<User>, UserError>;

    async fn count(&self) -> Result<u64, UserError>;

    async fn all(&self) -> Result<Vec<User>, UserError>;
}
