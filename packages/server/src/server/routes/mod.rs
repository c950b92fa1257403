// HTTP routes
pub mod dreams;
pub mod health;

pub use dreams::*;
pub use health::*;
