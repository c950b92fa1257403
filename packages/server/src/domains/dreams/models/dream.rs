use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ValidatedListParams;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "dream_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DreamStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl DreamStatus {
    /// Whether the dream has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DreamStatus::Completed | DreamStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "output_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    #[default]
    Narrative,
    Illustration,
    #[sqlx(rename = "3d_scenario")]
    #[serde(rename = "3d_scenario")]
    ThreeDScenario,
}

impl OutputKind {
    /// Wire name, as stored in the database and accepted over the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Narrative => "narrative",
            OutputKind::Illustration => "illustration",
            OutputKind::ThreeDScenario => "3d_scenario",
        }
    }
}

// ============================================================================
// Dream
// ============================================================================

/// A submitted dream and the state of its content generation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Dream {
    pub id: Uuid,
    pub user_id: String,
    pub description: String,
    pub preferred_output_kind: OutputKind,
    pub status: DreamStatus,
    pub content_url: Option<String>,
    pub content_preview: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating a dream.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDream {
    pub user_id: String,
    pub description: String,
    #[serde(default)]
    pub preferred_output_kind: OutputKind,
}

impl Dream {
    pub async fn create(input: &CreateDream, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO dreams (user_id, description, preferred_output_kind) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&input.user_id)
        .bind(&input.description)
        .bind(input.preferred_output_kind)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM dreams WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// List dreams in submission order with offset pagination.
    pub async fn list(params: &ValidatedListParams, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM dreams ORDER BY created_at, id OFFSET $1 LIMIT $2",
        )
        .bind(params.offset)
        .bind(params.limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Transition a pending dream to completed.
    ///
    /// Returns `None` if the dream does not exist or has already left the
    /// pending state, so the first writer wins and repeats are no-ops.
    pub async fn mark_completed(
        id: Uuid,
        content_url: Option<&str>,
        content_preview: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE dreams
            SET status = 'completed', content_url = $2, content_preview = $3, completed_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(content_url)
        .bind(content_preview)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Transition a pending dream to failed, recording the error.
    ///
    /// Same single-transition guarantee as [`Dream::mark_completed`].
    pub async fn mark_failed(id: Uuid, error: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE dreams
            SET status = 'failed', error_message = $2, completed_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(error)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
