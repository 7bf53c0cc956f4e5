//! PostgreSQL implementation of the ListingStore port.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::OffsetDateTime;

use super::{escape_like, is_unique_violation, to_bound};
use crate::domain::{
    models::{
        Internship, InternshipId, InternshipPatch, ListingFilter, NewInternship, UserId, Window,
    },
    ports::outbound::ListingStore,
    ListingError,
};

const INTERNSHIP_COLUMNS: &str = "id, internship_name, internship_url, heading_url, \
     company_name, stipend, duration, location, apply_by, img_link, about_company, \
     more_about, who_can_apply, activities, skills, users, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct InternshipRow {
    id: i32,
    internship_name: String,
    internship_url: String,
    heading_url: String,
    company_name: String,
    stipend: String,
    duration: String,
    location: String,
    apply_by: String,
    img_link: Option<String>,
    about_company: String,
    more_about: Option<String>,
    who_can_apply: Option<String>,
    activities: Vec<String>,
    skills: Vec<String>,
    users: Vec<i32>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<InternshipRow> for Internship {
    fn from(row: InternshipRow) -> Self {
        Self {
            id: InternshipId::new(row.id),
            internship_name: row.internship_name,
            internship_url: row.internship_url,
            heading_url: row.heading_url,
            company_name: row.company_name,
            stipend: row.stipend,
            duration: row.duration,
            location: row.location,
            apply_by: row.apply_by,
            img_link: row.img_link,
            about_company: row.about_company,
            more_about: row.more_about,
            who_can_apply: row.who_can_apply,
            activities: row.activities,
            skills: row.skills,
            users: row.users.into_iter().map(UserId::new).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresListingStore {
    pool: PgPool,
}

impl PostgresListingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Appends a WHERE clause for every present filter term.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ListingFilter) {
    let mut separator = " WHERE ";

    if let Some(name) = &filter.name_contains {
        builder
            .push(separator)
            .push("internship_name ILIKE ")
            .push_bind(format!("%{}%", escape_like(name)));
        separator = " AND ";
    }

    if let Some(location) = &filter.location_contains {
        builder
            .push(separator)
            .push("location ILIKE ")
            .push_bind(format!("%{}%", escape_like(location)));
    }
}

fn find_query<'a>(filter: &ListingFilter, window: Window) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {INTERNSHIP_COLUMNS} FROM internships"));
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY id");

    if window.skip > 0 {
        builder.push(" OFFSET ").push_bind(to_bound(window.skip));
    }
    if let Some(limit) = window.limit {
        builder.push(" LIMIT ").push_bind(to_bound(limit));
    }

    builder
}

fn store_error(err: sqlx::Error) -> ListingError {
    ListingError::store(err.to_string())
}

#[async_trait]
impl ListingStore for PostgresListingStore {
    async fn find(
        &self,
        filter: &ListingFilter,
        window: Window,
    ) -> Result<Vec<Internship>, ListingError> {
        let rows = find_query(filter, window)
            .build_query_as::<InternshipRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(Internship::from).collect())
    }

    async fn count(&self, filter: &ListingFilter) -> Result<u64, ListingError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM internships");
        push_filter(&mut builder, filter);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(count.max(0) as u64)
    }

    async fn heading_urls(&self) -> Result<Vec<String>, ListingError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT heading_url
            FROM internships
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)
    }

    async fn find_by_heading_url(
        &self,
        heading_url: &str,
    ) -> Result<Option<Internship>, ListingError> {
        let row = sqlx::query_as::<_, InternshipRow>(&format!(
            "SELECT {INTERNSHIP_COLUMNS} FROM internships WHERE heading_url = $1"
        ))
        .bind(heading_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Internship::from))
    }

    async fn insert(&self, internship: &NewInternship) -> Result<Internship, ListingError> {
        let row = sqlx::query_as::<_, InternshipRow>(&format!(
            r#"
            INSERT INTO internships (
                internship_name, internship_url, heading_url, company_name, stipend,
                duration, location, apply_by, img_link, about_company, more_about,
                who_can_apply, activities, skills
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        ))
        .bind(&internship.internship_name)
        .bind(&internship.internship_url)
        .bind(&internship.heading_url)
        .bind(&internship.company_name)
        .bind(&internship.stipend)
        .bind(&internship.duration)
        .bind(&internship.location)
        .bind(&internship.apply_by)
        .bind(&internship.img_link)
        .bind(&internship.about_company)
        .bind(&internship.more_about)
        .bind(&internship.who_can_apply)
        .bind(&internship.activities)
        .bind(&internship.skills)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                ListingError::DuplicateHeading(internship.heading_url.clone())
            } else {
                store_error(err)
            }
        })?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: InternshipId,
        patch: &InternshipPatch,
    ) -> Result<Option<Internship>, ListingError> {
        let users = patch
            .users
            .as_ref()
            .map(|users| users.iter().map(|u| u.as_i32()).collect::<Vec<_>>());

        let row = sqlx::query_as::<_, InternshipRow>(&format!(
            r#"
            UPDATE internships
            SET internship_name = COALESCE($1, internship_name),
                internship_url = COALESCE($2, internship_url),
                heading_url = COALESCE($3, heading_url),
                company_name = COALESCE($4, company_name),
                stipend = COALESCE($5, stipend),
                duration = COALESCE($6, duration),
                location = COALESCE($7, location),
                apply_by = COALESCE($8, apply_by),
                img_link = COALESCE($9, img_link),
                about_company = COALESCE($10, about_company),
                more_about = COALESCE($11, more_about),
                who_can_apply = COALESCE($12, who_can_apply),
                activities = COALESCE($13, activities),
                skills = COALESCE($14, skills),
                users = COALESCE($15, users),
                updated_at = now()
            WHERE id = $16
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        ))
        .bind(&patch.internship_name)
        .bind(&patch.internship_url)
        .bind(&patch.heading_url)
        .bind(&patch.company_name)
        .bind(&patch.stipend)
        .bind(&patch.duration)
        .bind(&patch.location)
        .bind(&patch.apply_by)
        .bind(&patch.img_link)
        .bind(&patch.about_company)
        .bind(&patch.more_about)
        .bind(&patch.who_can_apply)
        .bind(&patch.activities)
        .bind(&patch.skills)
        .bind(users)
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| match (&patch.heading_url, is_unique_violation(&err)) {
            (Some(heading_url), true) => ListingError::DuplicateHeading(heading_url.clone()),
            _ => store_error(err),
        })?;

        Ok(row.map(Internship::from))
    }

    async fn delete_all(&self) -> Result<u64, ListingError> {
        let result = sqlx::query("DELETE FROM internships")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected())
    }
}
