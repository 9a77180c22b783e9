use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

use crate::modules::team::schema::Game;

/// Negotiation state. A scrim is created Pending; the opponent either
/// confirms it or declines, and a declined scrim is deleted outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "scrim_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScrimStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScrimEntity {
    pub id: Uuid,
    pub proposing_team: Uuid,
    pub opponent_team: Uuid,
    pub scrim_datetime: chrono::DateTime<chrono::Utc>,
    pub game: Game,
    pub status: ScrimStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
