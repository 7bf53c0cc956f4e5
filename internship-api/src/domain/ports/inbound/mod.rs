mod listings;
mod users;

pub use listings::*;
pub use users::*;
