mod listing_store;
mod password_hasher;
mod user_store;

pub use listing_store::*;
pub use password_hasher::*;
pub use user_store::*;
