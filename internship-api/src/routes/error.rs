use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{ListingError, UserError};

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::InvalidSearch
            | ListingError::Validation(_)
            | ListingError::DuplicateHeading(_) => Self::bad_request(err.to_string()),
            ListingError::NoSearchMatches(_)
            | ListingError::NoCategoryMatches(_)
            | ListingError::NotFound => Self::not_found(err.to_string()),
            ListingError::Store(ref e) => {
                tracing::error!("Listing store error: {}", e);
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(_) | UserError::EmailTaken => Self::bad_request(err.to_string()),
            UserError::InvalidCredentials | UserError::IncorrectPassword => {
                Self::unauthorized(err.to_string())
            }
            UserError::NotFound => Self::not_found(err.to_string()),
            UserError::Hashing(ref e) => {
                tracing::error!("Password hashing error: {}", e);
                Self::internal(err.to_string())
            }
            UserError::Store(ref e) => {
                tracing::error!("User store error: {}", e);
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog::Category, models::SearchTerms};

    #[test]
    fn listing_errors_map_to_statuses() {
        let cases = [
            (ListingError::InvalidSearch, StatusCode::BAD_REQUEST),
            (
                ListingError::NoSearchMatches(SearchTerms::Name("x".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                ListingError::NoCategoryMatches(Category::Finance),
                StatusCode::NOT_FOUND,
            ),
            (
                ListingError::DuplicateHeading("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ListingError::store("connection reset"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn store_message_is_passed_through() {
        let api_error = ApiError::from(ListingError::store("pool timed out"));
        assert_eq!(api_error.message, "pool timed out");
    }

    #[test]
    fn credential_errors_are_unauthorized() {
        assert_eq!(
            ApiError::from(UserError::IncorrectPassword).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(UserError::EmailTaken).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
