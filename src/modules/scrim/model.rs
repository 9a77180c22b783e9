use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::scrim::schema::ScrimStatus;
use crate::modules::team::schema::Game;

#[derive(Deserialize, Validate)]
pub struct ProposeScrimModel {
    pub opponent_id: Uuid,
    pub scrim_datetime: chrono::DateTime<chrono::Utc>,
    pub game: Game,
}

pub struct InsertScrim {
    pub proposing_team: Uuid,
    pub opponent_team: Uuid,
    pub scrim_datetime: chrono::DateTime<chrono::Utc>,
    pub game: Game,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrimParty {
    pub id: Uuid,
    pub team_name: String,
    pub tag: Option<String>,
}

/// A scrim with both parties resolved for display.
#[derive(sqlx::FromRow)]
pub struct ScrimRow {
    pub id: Uuid,
    pub proposing_team: Uuid,
    pub proposing_name: String,
    pub proposing_tag: Option<String>,
    pub opponent_team: Uuid,
    pub opponent_name: String,
    pub opponent_tag: Option<String>,
    pub scrim_datetime: chrono::DateTime<chrono::Utc>,
    pub game: Game,
    pub status: ScrimStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrimResponse {
    pub id: Uuid,
    pub proposing_team: ScrimParty,
    pub opponent_team: ScrimParty,
    pub scrim_datetime: chrono::DateTime<chrono::Utc>,
    pub game: Game,
    pub status: ScrimStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ScrimRow> for ScrimResponse {
    fn from(row: ScrimRow) -> Self {
        ScrimResponse {
            id: row.id,
            proposing_team: ScrimParty {
                id: row.proposing_team,
                team_name: row.proposing_name,
                tag: row.proposing_tag,
            },
            opponent_team: ScrimParty {
                id: row.opponent_team,
                team_name: row.opponent_name,
                tag: row.opponent_tag,
            },
            scrim_datetime: row.scrim_datetime,
            game: row.game,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
