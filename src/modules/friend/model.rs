use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::team::model::TeamSummary;
use crate::modules::team::schema::Game;

/// A pending request as seen from one side: the other team plus when the
/// request was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequestView {
    pub team: TeamSummary,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(sqlx::FromRow)]
pub struct FriendRequestRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub tag: Option<String>,
    pub main_game: Option<Game>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FriendRequestRow> for FriendRequestView {
    fn from(row: FriendRequestRow) -> Self {
        FriendRequestView {
            team: TeamSummary {
                id: row.team_id,
                team_name: row.team_name,
                tag: row.tag,
                main_game: row.main_game,
            },
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FriendRequestLists {
    pub incoming: Vec<FriendRequestView>,
    pub outgoing: Vec<FriendRequestView>,
}
