pub mod models;
pub mod processor;
pub mod queue;

// Re-export commonly used types
pub use models::{CreateDream, Dream, DreamStatus, OutputKind};
pub use processor::process_dream;
pub use queue::{GenerationQueue, GenerationWorker, GenerationWorkerConfig};
