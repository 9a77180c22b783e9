use uuid::Uuid;

use crate::api::error;
use crate::modules::friend::model::FriendRequestView;
use crate::modules::friend::schema::{FriendEntity, FriendRequestEntity};
use crate::modules::team::model::TeamSummary;

#[async_trait::async_trait]
pub trait FriendshipRepository {
    async fn find_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    async fn find_friends(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<TeamSummary>, error::SystemError>;

    async fn delete_friendship(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<bool, error::SystemError>;

    /// Every friendship edge in the store, one entry per pair. Feeds the
    /// recommendation graph.
    async fn friend_edges(&self) -> Result<Vec<(Uuid, Uuid)>, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRequestRepository {
    /// Directional lookup: a pending request from `from` to `to`.
    async fn find_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    /// Either direction between the pair.
    async fn find_request_between(
        &self,
        team_id_a: &Uuid,
        team_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    async fn create_request(
        &self,
        from: &Uuid,
        to: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError>;

    async fn delete_request(&self, request_id: &Uuid) -> Result<(), error::SystemError>;

    async fn incoming_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, error::SystemError>;

    async fn outgoing_requests(
        &self,
        team_id: &Uuid,
    ) -> Result<Vec<FriendRequestView>, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRepo: FriendshipRepository + FriendRequestRepository + Send + Sync {
    /// Removes the pending request from `requester` to `accepting` and
    /// inserts the friendship edge in a single transaction, so the graph can
    /// never be observed half-applied. NotFound if no such request exists.
    async fn accept_request_atomic(
        &self,
        accepting: &Uuid,
        requester: &Uuid,
    ) -> Result<(), error::SystemError>;
}
