pub mod decision;
pub mod flight;
pub mod query;

pub use decision::*;
pub use flight::*;
pub use query::*;
