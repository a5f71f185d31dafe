use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Requester, Volunteer};

/// Request to match a volunteer against requester tasks
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequesterMatchRequest {
    pub volunteer: Volunteer,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub requesters: Vec<Requester>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to match a volunteer against organization tasks
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrganizationMatchRequest {
    pub volunteer: Volunteer,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub organizations: Vec<Requester>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}
