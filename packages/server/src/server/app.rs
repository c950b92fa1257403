//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::dreams::{GenerationQueue, GenerationWorker, GenerationWorkerConfig};
use crate::kernel::{BaseContentGenerator, GeminiGenerator};
use crate::server::routes::{
    create_dream_handler, get_dream_handler, health_handler, list_dreams_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub generation_queue: GenerationQueue,
}

/// Build the Axum application router.
///
/// The Gemini client is constructed once here and shared by all generation
/// tasks. A missing API key does not prevent startup; generation attempts
/// simply fail until it is configured.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let generator: Arc<dyn BaseContentGenerator> = Arc::new(GeminiGenerator::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));

    let worker_config = GenerationWorkerConfig {
        max_concurrency: config.generation_max_concurrency,
        ..Default::default()
    };

    build_app_with_generator(
        pool,
        generator,
        config.generation_queue_capacity,
        worker_config,
    )
}

/// Build the router with a specific generator implementation.
///
/// Tests inject a mock generator here; production goes through [`build_app`].
/// Spawns the generation worker as a background task.
pub fn build_app_with_generator(
    pool: PgPool,
    generator: Arc<dyn BaseContentGenerator>,
    queue_capacity: usize,
    worker_config: GenerationWorkerConfig,
) -> Router {
    let (generation_queue, receiver) = GenerationQueue::new(queue_capacity);

    let worker = GenerationWorker::with_config(pool.clone(), generator, receiver, worker_config);
    tokio::spawn(async move {
        if let Err(e) = worker.run().await {
            tracing::error!(error = %e, "Generation worker exited with error");
        }
    });

    // Create shared app state
    let app_state = AppState {
        db_pool: pool,
        generation_queue,
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/dreams", post(create_dream_handler).get(list_dreams_handler))
        .route("/dreams/:id", get(get_dream_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
