use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A friendship edge, stored once per pair with `team_a < team_b`.
/// The canonical order makes symmetry structural: one row answers the
/// question for both directions.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendEntity {
    pub team_a: Uuid,
    pub team_b: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A pending friend request. Directional; at most one may exist per pair.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendRequestEntity {
    pub id: Uuid,
    pub from_team_id: Uuid,
    pub to_team_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Puts a pair of team ids into canonical storage order.
pub fn ordered_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
