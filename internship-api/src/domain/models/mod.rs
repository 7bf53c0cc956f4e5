mod filter;
mod ids;
mod internship;
mod page;
mod user;

pub use filter::*;
pub use ids::*;
pub use internship::*;
pub use page::*;
pub use user::*;
