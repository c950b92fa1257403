//! Kernel module - server infrastructure and dependencies.

pub mod generator;
pub mod test_dependencies;
pub mod traits;

pub use generator::GeminiGenerator;
pub use test_dependencies::MockGenerator;
pub use traits::*;
