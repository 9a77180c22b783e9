//! In-memory repository doubles shared by the service tests. They honor the
//! same contracts as the Postgres implementations, including the conflict
//! constraint names surfaced by the real unique indexes.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use scrimhub::api::error::{DbErrorMeta, SystemError};
use scrimhub::configs::Cache;
use scrimhub::modules::friend::model::{FriendRequestView, FriendRequestRow};
use scrimhub::modules::friend::repository::{
    FriendRepo, FriendRequestRepository, FriendshipRepository,
};
use scrimhub::modules::friend::schema::{ordered_pair, FriendEntity, FriendRequestEntity};
use scrimhub::modules::player::model::InsertPlayer;
use scrimhub::modules::player::repository::PlayerRepository;
use scrimhub::modules::player::schema::PlayerEntity;
use scrimhub::modules::post::model::{FeedRow, InsertComment, InsertPost};
use scrimhub::modules::post::repository::PostRepository;
use scrimhub::modules::post::schema::{CommentEntity, PostEntity};
use scrimhub::modules::scrim::model::{InsertScrim, ScrimRow};
use scrimhub::modules::scrim::repository::ScrimRepository;
use scrimhub::modules::scrim::schema::{ScrimEntity, ScrimStatus};
use scrimhub::modules::team::model::{InsertTeam, TeamSummary, UpdateTeam};
use scrimhub::modules::team::repository::TeamRepository;
use scrimhub::modules::team::schema::{Game, TeamEntity};
use scrimhub::utils::new_uuid;

fn unique_violation(constraint: &'static str) -> SystemError {
    SystemError::Conflict(Some(DbErrorMeta {
        code: Some("23505".to_string()),
        constraint: Some(constraint.to_string()),
        message: String::new(),
    }))
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryTeamRepo {
    pub teams: Mutex<HashMap<Uuid, TeamEntity>>,
}

impl MemoryTeamRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds a team directly, bypassing the registration flow.
    pub fn seed(&self, team_name: &str, main_game: Option<Game>) -> Uuid {
        let id = new_uuid();
        let team = TeamEntity {
            id,
            email: format!("{}@example.com", team_name.to_lowercase()),
            hash_password: String::new(),
            team_name: team_name.to_string(),
            tag: None,
            bio: None,
            logo_url: None,
            main_game,
            socials: None,
            created_at: Utc::now(),
        };
        self.teams.lock().unwrap().insert(id, team);
        id
    }

    pub fn rename(&self, id: Uuid, new_name: &str) {
        let mut teams = self.teams.lock().unwrap();
        if let Some(team) = teams.get_mut(&id) {
            team.team_name = new_name.to_string();
        }
    }

    fn summary(&self, id: &Uuid) -> Option<TeamSummary> {
        self.teams.lock().unwrap().get(id).cloned().map(TeamSummary::from)
    }
}

#[async_trait::async_trait]
impl TeamRepository for MemoryTeamRepo {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<TeamEntity>, SystemError> {
        Ok(self.teams.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<TeamEntity>, SystemError> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .values()
            .find(|t| t.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<TeamEntity>, SystemError> {
        let teams = self.teams.lock().unwrap();
        Ok(ids.iter().filter_map(|id| teams.get(id).cloned()).collect())
    }

    async fn create(&self, team: &InsertTeam) -> Result<Uuid, SystemError> {
        let mut teams = self.teams.lock().unwrap();
        if teams.values().any(|t| t.email.eq_ignore_ascii_case(&team.email)) {
            return Err(unique_violation("teams_email_key"));
        }
        if teams.values().any(|t| t.team_name == team.team_name) {
            return Err(unique_violation("teams_team_name_key"));
        }

        let id = new_uuid();
        teams.insert(
            id,
            TeamEntity {
                id,
                email: team.email.clone(),
                hash_password: team.hash_password.clone(),
                team_name: team.team_name.clone(),
                tag: team.tag.clone(),
                bio: None,
                logo_url: None,
                main_game: team.main_game,
                socials: None,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update_profile(
        &self,
        id: &Uuid,
        update: &UpdateTeam,
    ) -> Result<TeamEntity, SystemError> {
        let mut teams = self.teams.lock().unwrap();
        let team =
            teams.get_mut(id).ok_or_else(|| SystemError::not_found("Team not found"))?;

        if let Some(team_name) = &update.team_name {
            team.team_name = team_name.clone();
        }
        if let Some(tag) = &update.tag {
            team.tag = Some(tag.clone());
        }
        if let Some(bio) = &update.bio {
            team.bio = Some(bio.clone());
        }
        if let Some(logo_url) = &update.logo_url {
            team.logo_url = Some(logo_url.clone());
        }
        if let Some(main_game) = update.main_game {
            team.main_game = Some(main_game);
        }
        if let Some(socials) = &update.socials {
            team.socials = Some(sqlx::types::Json(socials.clone()));
        }

        Ok(team.clone())
    }

    async fn list_all(&self) -> Result<Vec<TeamEntity>, SystemError> {
        let mut teams: Vec<TeamEntity> = self.teams.lock().unwrap().values().cloned().collect();
        teams.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(teams)
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<TeamSummary>, SystemError> {
        let query = query.to_lowercase();
        let mut matches: Vec<TeamSummary> = self
            .teams
            .lock()
            .unwrap()
            .values()
            .filter(|t| {
                t.team_name.to_lowercase().contains(&query)
                    || t.tag.as_deref().is_some_and(|tag| tag.to_lowercase().contains(&query))
            })
            .cloned()
            .map(TeamSummary::from)
            .collect();
        matches.sort_by(|a, b| a.team_name.cmp(&b.team_name));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryPlayerRepo {
    pub players: Mutex<HashMap<Uuid, PlayerEntity>>,
}

impl MemoryPlayerRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MemoryPlayerRepo {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PlayerEntity>, SystemError> {
        Ok(self.players.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, player: &InsertPlayer) -> Result<PlayerEntity, SystemError> {
        let mut players = self.players.lock().unwrap();
        if players.values().any(|p| p.nickname == player.nickname) {
            return Err(unique_violation("players_nickname_key"));
        }

        let entity = PlayerEntity {
            id: new_uuid(),
            nickname: player.nickname.clone(),
            full_name: player.full_name.clone(),
            role: player.role.clone(),
            team_id: Some(player.team_id),
            created_at: Utc::now(),
        };
        players.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, SystemError> {
        Ok(self.players.lock().unwrap().remove(id).is_some())
    }

    async fn list_by_team(&self, team_id: &Uuid) -> Result<Vec<PlayerEntity>, SystemError> {
        let mut players: Vec<PlayerEntity> = self
            .players
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.team_id == Some(*team_id))
            .cloned()
            .collect();
        players.sort_by(|a, b| a.nickname.cmp(&b.nickname));
        Ok(players)
    }

    async fn list_by_teams(&self, team_ids: &[Uuid]) -> Result<Vec<PlayerEntity>, SystemError> {
        let wanted: HashSet<&Uuid> = team_ids.iter().collect();
        Ok(self
            .players
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.team_id.as_ref().is_some_and(|id| wanted.contains(id)))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Friends
// ---------------------------------------------------------------------------

pub struct MemoryFriendRepo {
    pub friendships: Mutex<HashMap<(Uuid, Uuid), FriendEntity>>,
    pub requests: Mutex<Vec<FriendRequestEntity>>,
    teams: Arc<MemoryTeamRepo>,
}

impl MemoryFriendRepo {
    pub fn new(teams: Arc<MemoryTeamRepo>) -> Arc<Self> {
        Arc::new(Self {
            friendships: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            teams,
        })
    }

    fn request_view(&self, other: &Uuid, created_at: DateTime<Utc>) -> Option<FriendRequestView> {
        self.teams.summary(other).map(|team| {
            FriendRequestView::from(FriendRequestRow {
                team_id: team.id,
                team_name: team.team_name,
                tag: team.tag,
                main_game: team.main_game,
                created_at,
            })
        })
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for MemoryFriendRepo {
    async fn find_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendEntity>, SystemError> {
        let pair = ordered_pair(*team_id_a, *team_id_b);
        Ok(self.friendships.lock().unwrap().get(&pair).cloned())
    }

    async fn find_friends(&self, team_id: &Uuid) -> Result<Vec<TeamSummary>, SystemError> {
        let friendships = self.friendships.lock().unwrap();
        let mut friends: Vec<TeamSummary> = friendships
            .keys()
            .filter_map(|(a, b)| {
                if a == team_id {
                    Some(*b)
                } else if b == team_id {
                    Some(*a)
                } else {
                    None
                }
            })
            .filter_map(|other| self.teams.summary(&other))
            .collect();
        friends.sort_by(|a, b| a.team_name.cmp(&b.team_name));
        Ok(friends)
    }

    async fn delete_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<bool, SystemError> {
        let pair = ordered_pair(*team_id_a, *team_id_b);
        Ok(self.friendships.lock().unwrap().remove(&pair).is_some())
    }

    async fn friend_edges(&self) -> Result<Vec<(Uuid, Uuid)>, SystemError> {
        Ok(self.friendships.lock().unwrap().keys().copied().collect())
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for MemoryFriendRepo {
    async fn find_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, SystemError> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.from_team_id == *from && r.to_team_id == *to)
            .cloned())
    }

    async fn find_request_between(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, SystemError> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| {
                (r.from_team_id == *team_id_a && r.to_team_id == *team_id_b)
                    || (r.from_team_id == *team_id_b && r.to_team_id == *team_id_a)
            })
            .cloned())
    }

    async fn create_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<FriendRequestEntity, SystemError> {
        let mut requests = self.requests.lock().unwrap();
        if requests.iter().any(|r| r.from_team_id == *from && r.to_team_id == *to) {
            return Err(unique_violation("friend_requests_pair_key"));
        }

        let request = FriendRequestEntity {
            id: new_uuid(),
            from_team_id: *from,
            to_team_id: *to,
            created_at: Utc::now(),
        };
        requests.push(request.clone());
        Ok(request)
    }

    async fn delete_request(&self, request_id: &Uuid) -> Result<(), SystemError> {
        self.requests.lock().unwrap().retain(|r| r.id != *request_id);
        Ok(())
    }

    async fn incoming_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, SystemError> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.to_team_id == *team_id)
            .filter_map(|r| self.request_view(&r.from_team_id, r.created_at))
            .collect())
    }

    async fn outgoing_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, SystemError> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.from_team_id == *team_id)
            .filter_map(|r| self.request_view(&r.to_team_id, r.created_at))
            .collect())
    }
}

#[async_trait::async_trait]
impl FriendRepo for MemoryFriendRepo {
    async fn accept_request_atomic(
        &self,
        accepting: &Uuid,
        requester: &Uuid,
    ) -> Result<(), SystemError> {
        let mut requests = self.requests.lock().unwrap();
        let position = requests
            .iter()
            .position(|r| r.from_team_id == *requester && r.to_team_id == *accepting)
            .ok_or_else(|| SystemError::not_found("Friend request not found"))?;
        requests.remove(position);

        let pair = ordered_pair(*requester, *accepting);
        self.friendships.lock().unwrap().entry(pair).or_insert(FriendEntity {
            team_a: pair.0,
            team_b: pair.1,
            created_at: Utc::now(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

pub struct MemoryPostRepo {
    pub posts: Mutex<Vec<PostEntity>>,
    pub likes: Mutex<HashSet<(Uuid, Uuid)>>,
    pub comments: Mutex<Vec<CommentEntity>>,
    teams: Arc<MemoryTeamRepo>,
}

impl MemoryPostRepo {
    pub fn new(teams: Arc<MemoryTeamRepo>) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            likes: Mutex::new(HashSet::new()),
            comments: Mutex::new(Vec::new()),
            teams,
        })
    }

    /// Seeds a post with an explicit creation time, for ranking tests.
    pub fn seed_post(&self, author_id: Uuid, content: &str, created_at: DateTime<Utc>) -> Uuid {
        let id = new_uuid();
        self.posts.lock().unwrap().push(PostEntity {
            id,
            author_id,
            content: content.to_string(),
            created_at,
        });
        id
    }

    fn feed_row(&self, post: &PostEntity) -> Option<FeedRow> {
        let author = self.teams.summary(&post.author_id)?;
        let likes = self.likes.lock().unwrap();
        Some(FeedRow {
            id: post.id,
            author_id: post.author_id,
            content: post.content.clone(),
            created_at: post.created_at,
            author_name: author.team_name,
            author_tag: author.tag,
            likes_count: likes.iter().filter(|(p, _)| *p == post.id).count() as i64,
        })
    }
}

#[async_trait::async_trait]
impl PostRepository for MemoryPostRepo {
    async fn create(&self, post: &InsertPost) -> Result<PostEntity, SystemError> {
        let entity = PostEntity {
            id: new_uuid(),
            author_id: post.author_id,
            content: post.content.clone(),
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PostEntity>, SystemError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == *id).cloned())
    }

    async fn list_feed(&self) -> Result<Vec<FeedRow>, SystemError> {
        let posts = self.posts.lock().unwrap().clone();
        let mut rows: Vec<FeedRow> = posts.iter().filter_map(|p| self.feed_row(p)).collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_by_author(&self, team_id: &Uuid) -> Result<Vec<FeedRow>, SystemError> {
        let posts = self.posts.lock().unwrap().clone();
        let mut rows: Vec<FeedRow> = posts
            .iter()
            .filter(|p| p.author_id == *team_id)
            .filter_map(|p| self.feed_row(p))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_popular(&self, limit: i64) -> Result<Vec<FeedRow>, SystemError> {
        let posts = self.posts.lock().unwrap().clone();
        let mut rows: Vec<FeedRow> = posts.iter().filter_map(|p| self.feed_row(p)).collect();
        rows.sort_by(|a, b| {
            b.likes_count.cmp(&a.likes_count).then_with(|| b.created_at.cmp(&a.created_at))
        });
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn toggle_like(
        &self,
        post_id: &Uuid,
        team_id: &Uuid,
    ) -> Result<(bool, i64), SystemError> {
        let mut likes = self.likes.lock().unwrap();
        let key = (*post_id, *team_id);
        let liked = if likes.contains(&key) {
            likes.remove(&key);
            false
        } else {
            likes.insert(key);
            true
        };
        let count = likes.iter().filter(|(p, _)| p == post_id).count() as i64;
        Ok((liked, count))
    }

    async fn insert_comment(
        &self,
        comment: &InsertComment,
    ) -> Result<CommentEntity, SystemError> {
        let entity = CommentEntity {
            id: new_uuid(),
            post_id: comment.post_id,
            author_id: comment.author.id,
            author_name: comment.author.team_name.clone(),
            author_tag: comment.author.tag.clone(),
            content: comment.content.clone(),
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn comments_for(&self, post_ids: &[Uuid]) -> Result<Vec<CommentEntity>, SystemError> {
        let wanted: HashSet<&Uuid> = post_ids.iter().collect();
        let mut comments: Vec<CommentEntity> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| wanted.contains(&c.post_id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

// ---------------------------------------------------------------------------
// Scrims
// ---------------------------------------------------------------------------

pub struct MemoryScrimRepo {
    pub scrims: Mutex<HashMap<Uuid, ScrimEntity>>,
    teams: Arc<MemoryTeamRepo>,
}

impl MemoryScrimRepo {
    pub fn new(teams: Arc<MemoryTeamRepo>) -> Arc<Self> {
        Arc::new(Self { scrims: Mutex::new(HashMap::new()), teams })
    }
}

#[async_trait::async_trait]
impl ScrimRepository for MemoryScrimRepo {
    async fn create(&self, scrim: &InsertScrim) -> Result<ScrimEntity, SystemError> {
        let entity = ScrimEntity {
            id: new_uuid(),
            proposing_team: scrim.proposing_team,
            opponent_team: scrim.opponent_team,
            scrim_datetime: scrim.scrim_datetime,
            game: scrim.game,
            status: ScrimStatus::Pending,
            created_at: Utc::now(),
        };
        self.scrims.lock().unwrap().insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ScrimEntity>, SystemError> {
        Ok(self.scrims.lock().unwrap().get(id).cloned())
    }

    async fn transition_status(
        &self,
        id: &Uuid,
        expected: ScrimStatus,
        next: ScrimStatus,
    ) -> Result<bool, SystemError> {
        let mut scrims = self.scrims.lock().unwrap();
        match scrims.get_mut(id) {
            Some(scrim) if scrim.status == expected => {
                scrim.status = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, SystemError> {
        Ok(self.scrims.lock().unwrap().remove(id).is_some())
    }

    async fn list_for_team(&self, team_id: &Uuid) -> Result<Vec<ScrimRow>, SystemError> {
        let scrims = self.scrims.lock().unwrap();
        let mut rows: Vec<ScrimRow> = scrims
            .values()
            .filter(|s| s.proposing_team == *team_id || s.opponent_team == *team_id)
            .filter_map(|s| {
                let proposing = self.teams.summary(&s.proposing_team)?;
                let opponent = self.teams.summary(&s.opponent_team)?;
                Some(ScrimRow {
                    id: s.id,
                    proposing_team: s.proposing_team,
                    proposing_name: proposing.team_name,
                    proposing_tag: proposing.tag,
                    opponent_team: s.opponent_team,
                    opponent_name: opponent.team_name,
                    opponent_tag: opponent.tag,
                    scrim_datetime: s.scrim_datetime,
                    game: s.game,
                    status: s.status,
                    created_at: s.created_at,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.scrim_datetime.cmp(&a.scrim_datetime));
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// TTL-less cache for tests.
#[derive(Default)]
pub struct MemoryCache {
    pub entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait::async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, SystemError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _expiration_secs: u64) -> Result<(), SystemError> {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SystemError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
