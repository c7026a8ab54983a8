//! Group service

use campus_core::entities::Group;
use campus_core::value_objects::{RecordId, RecordKind};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateGroupRequest, GroupResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a group by id
    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: &RecordId) -> ServiceResult<GroupResponse> {
        let group = self.get_group_entity(group_id).await?;
        Ok(GroupResponse::from(&group))
    }

    async fn get_group_entity(&self, group_id: &RecordId) -> ServiceResult<Group> {
        self.ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", group_id.to_string()))
    }

    /// Create a group; the creator becomes its first member
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_group(
        &self,
        creator_id: &RecordId,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("Group name cannot be empty"));
        }

        UserService::new(self.ctx).get_user_entity(creator_id).await?;

        let mut group = Group::new(
            self.ctx.generate_id(RecordKind::Group),
            name,
            creator_id.clone(),
        );
        group.description = request.description.unwrap_or_default();
        group.avatar = request
            .avatar
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| default_group_avatar(&group.name));

        self.ctx.group_repo().create(&group).await?;
        info!(group_id = %group.id, creator_id = %creator_id, "Group created");
        Ok(GroupResponse::from(&group))
    }

    /// Join a group (idempotent)
    #[instrument(skip(self))]
    pub async fn join_group(
        &self,
        user_id: &RecordId,
        group_id: &RecordId,
    ) -> ServiceResult<GroupResponse> {
        UserService::new(self.ctx).get_user_entity(user_id).await?;
        let mut group = self.get_group_entity(group_id).await?;

        if group.add_member(user_id.clone()) {
            self.ctx.group_repo().update(&group).await?;
            info!(group_id = %group_id, user_id = %user_id, "Joined group");
        }
        Ok(GroupResponse::from(&group))
    }

    /// Leave a group (no-op when not a member)
    #[instrument(skip(self))]
    pub async fn leave_group(
        &self,
        user_id: &RecordId,
        group_id: &RecordId,
    ) -> ServiceResult<GroupResponse> {
        let mut group = self.get_group_entity(group_id).await?;

        if group.remove_member(user_id) {
            self.ctx.group_repo().update(&group).await?;
            info!(group_id = %group_id, user_id = %user_id, "Left group");
        }
        Ok(GroupResponse::from(&group))
    }

    /// Groups a user belongs to
    #[instrument(skip(self))]
    pub async fn groups_for_user(&self, user_id: &RecordId) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().find_by_member(user_id).await?;
        Ok(groups.iter().map(GroupResponse::from).collect())
    }

    /// All groups
    #[instrument(skip(self))]
    pub async fn all_groups(&self) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().list().await?;
        Ok(groups.iter().map(GroupResponse::from).collect())
    }

    /// Case-insensitive keyword search over group names and descriptions
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().list().await?;
        Ok(groups
            .iter()
            .filter(|g| g.matches_keyword(keyword))
            .map(GroupResponse::from)
            .collect())
    }
}

/// Stock avatar derived from the group name.
fn default_group_avatar(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/shapes/svg?seed={}",
        urlencode(name)
    )
}

/// Percent-encode everything outside the URL-unreserved set.
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
