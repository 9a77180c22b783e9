use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::player::schema::PlayerEntity;

#[derive(Deserialize, Validate)]
pub struct AddPlayerModel {
    #[validate(length(min = 2, message = "Nickname must be at least 2 characters long"))]
    pub nickname: String,
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: Option<String>,
}

pub struct InsertPlayer {
    pub nickname: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub team_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub nickname: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl From<PlayerEntity> for PlayerResponse {
    fn from(entity: PlayerEntity) -> Self {
        PlayerResponse {
            id: entity.id,
            nickname: entity.nickname,
            full_name: entity.full_name,
            role: entity.role,
        }
    }
}
