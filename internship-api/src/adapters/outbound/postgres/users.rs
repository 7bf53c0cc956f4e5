//! PostgreSQL implementation of the UserStore port.

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use super::is_unique_violation;
use crate::domain::{
    models::{NewUser, ProfilePatch, Role, User, UserId},
    ports::outbound::UserStore,
    UserError,
};

const USER_COLUMNS: &str =
    "id, email, phone, name, college, password_hash, role, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    phone: i64,
    name: String,
    college: Option<String>,
    password_hash: String,
    role: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            email: row.email,
            phone: row.phone,
            name: row.name,
            college: row.college,
            password_hash: row.password_hash,
            role: Role::from(row.role),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> UserError {
    UserError::store(err.to_string())
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (email, phone, name, college, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.email)
        .bind(user.phone)
        .bind(&user.name)
        .bind(&user.college)
        .bind(&user.password_hash)
        .bind(Role::default().to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                UserError::EmailTaken
            } else {
                store_error(err)
            }
        })?;

        Ok(row.into())
    }

    async fn update_profile(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                phone = COALESCE($2, phone),
                college = COALESCE($3, college),
                updated_at = now()
            WHERE email = $4
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&patch.name)
        .bind(patch.phone)
        .bind(&patch.college)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(User::from))
    }

    async fn set_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $1, updated_at = now()
            WHERE email = $2
            "#,
        )
        .bind(password_hash)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "DELETE FROM users WHERE email = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(User::from))
    }

    async fn count(&self) -> Result<u64, UserError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(count.max(0) as u64)
    }

    async fn all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
