use async_trait::async_trait;

use crate::domain::{
    models::{ProfilePatch, Registration, User},
    UserError,
};

#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn register(&self, registration: Registration) -> Result<User, UserError>;

    /// Checks credentials. No session is created.
    async fn login(&self, email: &str, password: &str) -> Result<User, UserError>;

    async fn count(&self) -> Result<u64, UserError>;

    async fn all(&self) -> Result<Vec<User>, UserError>;

    async fn get(&self, email: &str) -> Result<User, UserError>;

    async fn update_profile(&self, email: &str, patch: ProfilePatch) -> Result<User, UserError>;

    async fn update_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError>;

    async fn delete(&self, email: &str) -> Result<User, UserError>;
}
