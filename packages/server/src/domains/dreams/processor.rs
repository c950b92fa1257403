//! Dream processing pipeline.
//!
//! Takes a persisted dream from pending to a terminal state: load the
//! record, call the content generator, record the outcome. Transitions go
//! through the compare-and-set model methods, so a dream is completed or
//! failed at most once even when the same id is processed twice.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domains::dreams::models::Dream;
use crate::kernel::BaseContentGenerator;

/// Process a single dream end to end.
///
/// Generation errors are recorded on the dream as a failed status and do
/// not bubble up. An `Err` from this function means the store itself was
/// unreachable; the dream is left pending for a later attempt.
pub async fn process_dream(
    pool: &PgPool,
    generator: &dyn BaseContentGenerator,
    dream_id: Uuid,
) -> Result<()> {
    let dream = Dream::find_by_id(dream_id, pool)
        .await
        .context("Failed to load dream for processing")?;

    let Some(dream) = dream else {
        warn!(dream_id = %dream_id, "Dream not found for processing, skipping");
        return Ok(());
    };

    if dream.status.is_terminal() {
        debug!(dream_id = %dream_id, status = ?dream.status, "Dream already processed, skipping");
        return Ok(());
    }

    match generator
        .generate(&dream.description, dream.preferred_output_kind)
        .await
    {
        Ok(content) => {
            let updated =
                Dream::mark_completed(dream_id, content.url.as_deref(), &content.preview, pool)
                    .await
                    .context("Failed to record completed dream")?;

            match updated {
                Some(_) => info!(dream_id = %dream_id, "Dream completed"),
                None => debug!(
                    dream_id = %dream_id,
                    "Dream already left pending state, result discarded"
                ),
            }
        }
        Err(error) => {
            warn!(dream_id = %dream_id, error = %error, "Dream generation failed");

            let updated = Dream::mark_failed(dream_id, &format!("{:#}", error), pool)
                .await
                .context("Failed to record failed dream")?;

            if updated.is_none() {
                debug!(
                    dream_id = %dream_id,
                    "Dream already left pending state, failure not recorded"
                );
            }
        }
    }

    Ok(())
}
