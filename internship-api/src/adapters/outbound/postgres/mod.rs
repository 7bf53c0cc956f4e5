mod internships;
mod users;

pub use internships::PostgresListingStore;
pub use users::PostgresUserStore;

/// Escapes LIKE wildcards so a term is matched as literal text.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Converts a window bound to a BIGINT, saturating at `i64::MAX`.
fn to_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
