use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friend::{
            model::FriendRequestLists, repository::FriendRepo, schema::FriendRequestEntity,
        },
        team::{model::TeamSummary, repository::TeamRepository},
    },
};

#[derive(Clone)]
pub struct FriendService<R, T>
where
    R: FriendRepo + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    friend_repo: Arc<R>,
    team_repo: Arc<T>,
}

impl<R, T> FriendService<R, T>
where
    R: FriendRepo + Send + Sync,
    T: TeamRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>, team_repo: Arc<T>) -> Self {
        FriendService { friend_repo, team_repo }
    }

    /// A request may never coexist with a friendship, and only one pending
    /// direction is allowed per pair.
    pub async fn send_request(
        &self,
        from: Uuid,
        to: Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        if from == to {
            return Err(error::SystemError::bad_request(
                "Cannot send a friend request to your own team",
            ));
        }

        if self.team_repo.find_by_id(&to).await?.is_none() {
            return Err(error::SystemError::not_found("Team not found"));
        }

        let (friendship, pending) = tokio::try_join!(
            self.friend_repo.find_friendship(&from, &to),
            self.friend_repo.find_request_between(&from, &to),
        )?;

        if friendship.is_some() {
            return Err(error::SystemError::conflict("Teams are already friends"));
        }

        if pending.is_some() {
            return Err(error::SystemError::conflict("Friend request already exists"));
        }

        let request = self.friend_repo.create_request(&from, &to).await?;

        Ok(request)
    }

    /// After this returns, both teams see each other as friends and the
    /// pending request is gone; the repository guarantees both happen or
    /// neither does.
    pub async fn accept_request(
        &self,
        accepting: Uuid,
        requester: Uuid,
    ) -> Result<TeamSummary, error::SystemError> {
        self.friend_repo.accept_request_atomic(&accepting, &requester).await?;

        let requester_team = self
            .team_repo
            .find_by_id(&requester)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Team not found"))?;

        Ok(TeamSummary::from(requester_team))
    }

    /// Declining removes the request without trace.
    pub async fn decline_request(
        &self,
        accepting: Uuid,
        requester: Uuid,
    ) -> Result<(), error::SystemError> {
        let request = self
            .friend_repo
            .find_request(&requester, &accepting)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        self.friend_repo.delete_request(&request.id).await?;

        Ok(())
    }

    pub async fn remove_friend(
        &self,
        team_id: Uuid,
        friend_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let deleted = self.friend_repo.delete_friendship(&team_id, &friend_id).await?;
        if !deleted {
            return Err(error::SystemError::not_found("Friendship not found"));
        }
        Ok(())
    }

    pub async fn friends_of(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<TeamSummary>, error::SystemError> {
        if self.team_repo.find_by_id(&team_id).await?.is_none() {
            return Err(error::SystemError::not_found("Team not found"));
        }
        self.friend_repo.find_friends(&team_id).await
    }

    pub async fn get_friends(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<TeamSummary>, error::SystemError> {
        self.friend_repo.find_friends(&team_id).await
    }

    pub async fn request_lists(
        &self,
        team_id: Uuid,
    ) -> Result<FriendRequestLists, error::SystemError> {
        let (incoming, outgoing) = tokio::try_join!(
            self.friend_repo.incoming_requests(&team_id),
            self.friend_repo.outgoing_requests(&team_id),
        )?;

        Ok(FriendRequestLists { incoming, outgoing })
    }
}
