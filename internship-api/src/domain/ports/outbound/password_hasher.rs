use crate::domain::UserError;

/// One-way password hashing.
///
/// Implementations are CPU bound and called from the blocking pool.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, password: &str) -> Result<String, UserError>;

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError>;
}
