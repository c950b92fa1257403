// DreamScape - API Core
//
// This crate provides the backend API for submitting dreams and turning them
// into generated content (narratives, illustrations, 3D scenarios).
// Submissions are persisted immediately and processed by a background worker.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
