use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::friend::repository::FriendshipRepository;
use crate::modules::graph::analytics::FriendGraph;
use crate::modules::graph::model::Recommendation;
use crate::modules::team::repository::TeamRepository;
use crate::modules::team::schema::TeamEntity;

const SIMILAR_LIMIT: usize = 5;
const INFLUENCE_LIMIT: usize = 10;

#[derive(Clone)]
pub struct GraphService<F, T>
where
    F: FriendshipRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    friend_repo: Arc<F>,
    team_repo: Arc<T>,
}

impl<F, T> GraphService<F, T>
where
    F: FriendshipRepository + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<F>, team_repo: Arc<T>) -> Self {
        GraphService { friend_repo, team_repo }
    }

    /// Teams the caller might want to befriend: ranked by overlap between
    /// friend circles, skipping teams it already knows.
    pub async fn similar_teams(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<Recommendation>, error::SystemError> {
        let edges = self.friend_repo.friend_edges().await?;
        let graph = FriendGraph::from_edges(&edges);
        let scored = graph.similar_to(&team_id, SIMILAR_LIMIT);
        self.resolve(scored).await
    }

    /// The most connected teams on the platform, excluding the caller.
    pub async fn influential_teams(
        &self,
        exclude_team_id: Uuid,
    ) -> Result<Vec<Recommendation>, error::SystemError> {
        let edges = self.friend_repo.friend_edges().await?;
        let graph = FriendGraph::from_edges(&edges);

        let scored: Vec<(Uuid, f64)> = graph
            .page_rank()
            .into_iter()
            .filter(|(id, _)| *id != exclude_team_id)
            .take(INFLUENCE_LIMIT)
            .collect();
        self.resolve(scored).await
    }

    /// Maps ranked ids back onto team records, keeping the ranking order
    /// and dropping ids whose team has meanwhile disappeared.
    async fn resolve(
        &self,
        scored: Vec<(Uuid, f64)>,
    ) -> Result<Vec<Recommendation>, error::SystemError> {
        let ids: Vec<Uuid> = scored.iter().map(|(id, _)| *id).collect();
        let mut teams: HashMap<Uuid, TeamEntity> =
            self.team_repo.find_by_ids(&ids).await?.into_iter().map(|t| (t.id, t)).collect();

        Ok(scored
            .into_iter()
            .filter_map(|(id, score)| {
                teams.remove(&id).map(|team| Recommendation {
                    id: team.id,
                    team_name: team.team_name,
                    tag: team.tag,
                    main_game: team.main_game,
                    score,
                })
            })
            .collect())
    }
}
