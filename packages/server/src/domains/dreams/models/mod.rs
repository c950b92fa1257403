pub mod dream;

pub use dream::{CreateDream, Dream, DreamStatus, OutputKind};
