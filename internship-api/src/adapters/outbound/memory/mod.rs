//! Store adapters backed by process memory, used by tests.

mod listings;
mod users;

pub use listings::{sample, InMemoryListingStore};
pub use users::InMemoryUserStore;
