//! Shared test fixtures and helpers.

use std::time::Duration;

use api_core::domains::dreams::models::Dream;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

/// Build a dream submission body.
pub fn dream_body(user_id: &str, description: &str, output_kind: Option<&str>) -> Value {
    let mut body = json!({
        "user_id": user_id,
        "description": description,
    });
    if let Some(kind) = output_kind {
        body["preferred_output_kind"] = json!(kind);
    }
    body
}

/// Poll until the dream leaves the pending state, or panic after 5 seconds.
pub async fn wait_for_terminal(pool: &PgPool, id: Uuid) -> Dream {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let dream = Dream::find_by_id(id, pool)
            .await
            .expect("failed to load dream")
            .expect("dream disappeared while waiting");

        if dream.status.is_terminal() {
            return dream;
        }
        if tokio::time::Instant::now() > deadline {
            panic!("dream {} still pending after 5s", id);
        }

        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}
