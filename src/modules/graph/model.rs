use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::team::schema::Game;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub team_name: String,
    pub tag: Option<String>,
    pub main_game: Option<Game>,
    pub score: f64,
}
