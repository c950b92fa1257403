// Business domains
pub mod dreams;
