mod listings;
mod users;

pub use listings::{ListingServiceImpl, DEFAULT_PAGE_SIZE};
pub use users::UserServiceImpl;
