pub(crate) mod error;
pub(crate) mod internships;
pub(crate) mod users;

pub(crate) use error::ApiError;

use axum::Router;

use crate::AppState;

pub fn api() -> Router<AppState> {
    Router::new()
        .nest("/internship", internships::router())
        .nest("/users", users::router())
}

#[cfg(test)]
pub(crate) fn test_app(
    listing_store: crate::adapters::outbound::memory::InMemoryListingStore,
) -> Router {
    use std::sync::Arc;

    use crate::{
        adapters::outbound::{crypto::Argon2PasswordHasher, memory::InMemoryUserStore},
        domain::services::{ListingServiceImpl, UserServiceImpl, DEFAULT_PAGE_SIZE},
    };

    let state = AppState::from_services(
        Arc::new(ListingServiceImpl::new(
            Arc::new(listing_store),
            DEFAULT_PAGE_SIZE,
        )),
        Arc::new(UserServiceImpl::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
        )),
    );

    api().with_state(state)
}
