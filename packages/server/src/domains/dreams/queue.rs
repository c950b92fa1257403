//! Background generation queue and worker.
//!
//! Dream ids are dispatched onto a bounded channel at submission time and
//! consumed by a single worker service that fans work out to a fixed number
//! of concurrent generation tasks.
//!
//! ```text
//! POST /dreams ──► GenerationQueue (bounded mpsc)
//!                        │
//!                        ▼
//!                 GenerationWorker
//!                        │
//!                        └─► process_dream (at most max_concurrency at a time)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let (queue, receiver) = GenerationQueue::new(256);
//! let worker = GenerationWorker::new(pool, generator, receiver);
//!
//! // Spawn as background task
//! tokio::spawn(worker.run());
//!
//! queue.dispatch(dream_id).await?;
//! ```

use std::sync::Arc;

use anyhow::{anyhow, Result};
use sqlx::PgPool;
use tokio::sync::{mpsc, Semaphore};
use tracing::{error, info};
use uuid::Uuid;

use crate::domains::dreams::processor::process_dream;
use crate::kernel::BaseContentGenerator;

// ============================================================================
// Queue handle
// ============================================================================

/// Sending half of the generation pipeline.
///
/// Cheap to clone; HTTP handlers hold one. `dispatch` applies backpressure
/// when the queue is at capacity instead of dropping work.
#[derive(Clone)]
pub struct GenerationQueue {
    sender: mpsc::Sender<Uuid>,
}

impl GenerationQueue {
    /// Create a queue with the given capacity, returning the receiving half
    /// for the worker.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Uuid>) {
        // tokio channels require a nonzero capacity
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Enqueue a dream for processing. Waits when the queue is full.
    pub async fn dispatch(&self, dream_id: Uuid) -> Result<()> {
        self.sender
            .send(dream_id)
            .await
            .map_err(|_| anyhow!("generation queue is closed"))
    }
}

// ============================================================================
// Worker
// ============================================================================

/// Configuration for the generation worker.
#[derive(Debug, Clone)]
pub struct GenerationWorkerConfig {
    /// Maximum number of dreams processed concurrently; zero acts as one
    pub max_concurrency: usize,
    /// Worker ID for this instance
    pub worker_id: String,
}

impl Default for GenerationWorkerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            worker_id: format!("dream-worker-{}", Uuid::new_v4()),
        }
    }
}

impl GenerationWorkerConfig {
    /// Create a new config with a specific worker ID.
    pub fn with_worker_id(worker_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            ..Default::default()
        }
    }
}

/// Background service that drains the generation queue.
///
/// The worker owns the receiving half of the channel and gates concurrency
/// with a semaphore: at most `max_concurrency` dreams are processed at once,
/// and while all permits are taken the channel fills up and dispatchers wait.
pub struct GenerationWorker {
    pool: PgPool,
    generator: Arc<dyn BaseContentGenerator>,
    receiver: mpsc::Receiver<Uuid>,
    config: GenerationWorkerConfig,
}

impl GenerationWorker {
    /// Create a new worker with default configuration.
    pub fn new(
        pool: PgPool,
        generator: Arc<dyn BaseContentGenerator>,
        receiver: mpsc::Receiver<Uuid>,
    ) -> Self {
        Self {
            pool,
            generator,
            receiver,
            config: GenerationWorkerConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(
        pool: PgPool,
        generator: Arc<dyn BaseContentGenerator>,
        receiver: mpsc::Receiver<Uuid>,
        config: GenerationWorkerConfig,
    ) -> Self {
        Self {
            pool,
            generator,
            receiver,
            config,
        }
    }

    /// Run the worker until the queue is closed and drained.
    ///
    /// Returns once every accepted dream has finished processing, so callers
    /// can await completion after dropping all queue handles.
    pub async fn run(mut self) -> Result<()> {
        // A zero bound would never grant a permit; treat it as one
        let max_concurrency = self.config.max_concurrency.max(1);

        info!(
            worker_id = %self.config.worker_id,
            max_concurrency,
            "generation worker starting"
        );

        let semaphore = Arc::new(Semaphore::new(max_concurrency));

        while let Some(dream_id) = self.receiver.recv().await {
            // Hold a permit before spawning so in-flight work stays bounded
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                // Only fails if the semaphore is closed, which never happens here
                break;
            };

            let pool = self.pool.clone();
            let generator = self.generator.clone();

            tokio::spawn(async move {
                let _permit = permit;
                if let Err(e) = process_dream(&pool, generator.as_ref(), dream_id).await {
                    error!(dream_id = %dream_id, error = %e, "dream processing aborted");
                }
            });
        }

        // Queue closed: wait for in-flight generations to finish
        let _ = semaphore.acquire_many(max_concurrency as u32).await;

        info!(worker_id = %self.config.worker_id, "generation worker stopped");
        Ok(())
    }
}
