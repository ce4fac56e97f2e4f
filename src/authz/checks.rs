use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::claim_types::{GAME_ADMIN, HEAD_ADMIN, MODERATOR, SENIOR_ADMIN, SERVER_ADMIN};
use super::principal::Principal;
use super::resolver::ClaimedScope;
use crate::errors::AppError;

/// Which resolution a check uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// Exact scopes; gates create/edit/delete.
    #[default]
    Restricted,
    /// See-all scopes; gates read-only pages.
    Viewing,
}

impl ScopeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeMode::Restricted => "restricted",
            ScopeMode::Viewing => "viewing",
        }
    }

    pub fn resolve<S: AsRef<str>>(&self, principal: &Principal, required: &[S]) -> ClaimedScope {
        match self {
            ScopeMode::Restricted => principal.claimed_games_and_items(required),
            ScopeMode::Viewing => principal.claimed_games_and_items_for_viewing(required),
        }
    }
}

impl FromStr for ScopeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restricted" => Ok(ScopeMode::Restricted),
            "viewing" => Ok(ScopeMode::Viewing),
            other => Err(AppError::bad_request(format!(
                "unknown scope mode '{other}', expected 'restricted' or 'viewing'"
            ))),
        }
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization checks performed by portal features, each with its own set
/// of qualifying claim types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessCheck {
    /// Server admin dashboard and RCON actions.
    ServerAdmin,
    /// Editing another user's profile claims.
    ManageUserProfile,
    /// Game server management.
    GameServers,
    /// Demo listing.
    Demos,
}

impl AccessCheck {
    pub const ALL: [AccessCheck; 4] = [
        AccessCheck::ServerAdmin,
        AccessCheck::ManageUserProfile,
        AccessCheck::GameServers,
        AccessCheck::Demos,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AccessCheck::ServerAdmin => "server-admin",
            AccessCheck::ManageUserProfile => "manage-user-profile",
            AccessCheck::GameServers => "game-servers",
            AccessCheck::Demos => "demos",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.slug() == slug)
    }

    pub fn required_claim_types(&self) -> &'static [&'static str] {
        match self {
            AccessCheck::ServerAdmin => &[SENIOR_ADMIN, HEAD_ADMIN, GAME_ADMIN, SERVER_ADMIN],
            AccessCheck::ManageUserProfile | AccessCheck::GameServers => &[SENIOR_ADMIN, HEAD_ADMIN],
            AccessCheck::Demos => &[SENIOR_ADMIN, HEAD_ADMIN, GAME_ADMIN, MODERATOR],
        }
    }

    pub fn mode(&self) -> ScopeMode {
        match self {
            AccessCheck::Demos => ScopeMode::Viewing,
            _ => ScopeMode::Restricted,
        }
    }

    pub fn resolve(&self, principal: &Principal) -> ClaimedScope {
        self.mode().resolve(principal, self.required_claim_types())
    }
}

impl fmt::Display for AccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
