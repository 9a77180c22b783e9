use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

/// Supported titles. Stored as a Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(type_name = "game", rename_all = "snake_case")]
pub enum Game {
    #[serde(rename = "League of Legends")]
    LeagueOfLegends,
    #[serde(rename = "Valorant")]
    Valorant,
    #[serde(rename = "Counter-Strike")]
    CounterStrike,
}

impl Game {
    /// Role vocabulary for this title. Vocabularies are disjoint, so a role
    /// string identifies exactly one game.
    pub fn allowed_roles(self) -> &'static [&'static str] {
        match self {
            Game::LeagueOfLegends => &["Top Laner", "Jungler", "Mid Laner", "ADC", "Support"],
            Game::Valorant => &["Duelist", "Initiator", "Controller", "Sentinel", "Flex"],
            Game::CounterStrike => &["Entry Fragger", "AWPer", "IGL", "Lurker", "Rifler"],
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Game::LeagueOfLegends => "League of Legends",
            Game::Valorant => "Valorant",
            Game::CounterStrike => "Counter-Strike",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Socials {
    pub discord: Option<String>,
    pub twitter: Option<String>,
    pub twitch: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamEntity {
    pub id: Uuid,
    pub email: String,
    pub hash_password: String,
    pub team_name: String,
    pub tag: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub main_game: Option<Game>,
    pub socials: Option<sqlx::types::Json<Socials>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
