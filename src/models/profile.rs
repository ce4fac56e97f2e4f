use serde::Serialize;
use utoipa::ToSchema;

use crate::authz::{Claim, Principal};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub subject: String,
    #[schema(example = "Ada Lovelace")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub xtremeidiots_id: Option<String>,
    pub user_profile_id: Option<String>,
    pub photo_url: Option<String>,
    pub senior_admin: bool,
    pub claims: Vec<Claim>,
}

impl From<&Principal> for ProfileResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            subject: principal.subject.clone(),
            username: principal.username().map(String::from),
            email: principal.email().map(String::from),
            xtremeidiots_id: principal.xtremeidiots_id().map(String::from),
            user_profile_id: principal.user_profile_id().map(String::from),
            photo_url: principal.photo_url().map(String::from),
            senior_admin: principal.is_senior_admin(),
            claims: principal.claims.clone(),
        }
    }
}
