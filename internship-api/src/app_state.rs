use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::{
        crypto::Argon2PasswordHasher,
        postgres::{PostgresListingStore, PostgresUserStore},
    },
    config::ListingSettings,
    domain::{
        ports::inbound::{ListingService, UserService},
        services::{ListingServiceImpl, UserServiceImpl},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<dyn ListingService>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(db_pool: PgPool, listings: &ListingSettings) -> Self {
        let listing_store = Arc::new(PostgresListingStore::new(db_pool.clone()));
        let user_store = Arc::new(PostgresUserStore::new(db_pool));

        Self {
            listing_service: Arc::new(ListingServiceImpl::new(
                listing_store,
                listings.page_size,
            )),
            user_service: Arc::new(UserServiceImpl::new(
                user_store,
                Arc::new(Argon2PasswordHasher::new()),
            )),
        }
    }

    pub fn from_services(
        listing_service: Arc<dyn ListingService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            listing_service,
            user_service,
        }
    }
}
