use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::claim_types;
use super::game_type::GameType;
use super::resolver::{self, ClaimedScope};
use crate::errors::AppError;

/// A single `(type, value)` assertion issued by the identity layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Claim {
    #[serde(rename = "type")]
    #[schema(example = "HeadAdmin")]
    pub claim_type: String,
    #[schema(example = "CallOfDuty4")]
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    /// Parse the `Type=Value` shorthand used by the CLI.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let (claim_type, value) = input
            .split_once('=')
            .ok_or_else(|| AppError::bad_request(format!("claim '{input}' must be in Type=Value form")))?;

        let claim_type = claim_type.trim();
        if claim_type.is_empty() {
            return Err(AppError::bad_request(format!("claim '{input}' has an empty type")));
        }

        Ok(Self::new(claim_type, value.trim()))
    }

    pub fn game_type(&self) -> Option<GameType> {
        GameType::from_name(&self.value)
    }

    /// GUID value of the claim. Surrounding whitespace is ignored. Accepts the
    /// hyphenated, simple, braced and parenthesized forms, not URNs.
    pub fn item_id(&self) -> Option<Uuid> {
        let value = self.value.trim();
        if value.starts_with("urn:") {
            return None;
        }

        match value.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) {
            Some(inner) if inner.len() == 36 => Uuid::parse_str(inner).ok(),
            Some(_) => None,
            None => Uuid::parse_str(value).ok(),
        }
    }
}

/// Principal represents the authenticated user as a flat bag of claims
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
    pub claims: Vec<Claim>,
}

impl Principal {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            claims: Vec::new(),
        }
    }

    pub fn with_claims(mut self, claims: impl IntoIterator<Item = Claim>) -> Self {
        self.claims.extend(claims);
        self
    }

    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(Claim::new(claim_type, value));
        self
    }

    pub fn has_claim_type(&self, claim_type: &str) -> bool {
        self.claims.iter().any(|claim| claim.claim_type == claim_type)
    }

    pub fn find_first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.claim_type == claim_type)
            .map(|claim| claim.value.as_str())
    }

    pub fn is_senior_admin(&self) -> bool {
        self.has_claim_type(claim_types::SENIOR_ADMIN)
    }

    pub fn username(&self) -> Option<&str> {
        self.find_first(claim_types::NAME)
    }

    pub fn email(&self) -> Option<&str> {
        self.find_first(claim_types::EMAIL)
    }

    pub fn xtremeidiots_id(&self) -> Option<&str> {
        self.find_first(claim_types::XTREMEIDIOTS_ID)
    }

    pub fn user_profile_id(&self) -> Option<&str> {
        self.find_first(claim_types::USER_PROFILE_ID)
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.find_first(claim_types::PHOTO_URL)
    }

    pub fn claimed_games_and_items<S: AsRef<str>>(&self, required: &[S]) -> ClaimedScope {
        resolver::resolve_restricted(&self.claims, required)
    }

    pub fn claimed_game_types<S: AsRef<str>>(&self, required: &[S]) -> Vec<GameType> {
        resolver::resolve_game_types(&self.claims, required)
    }

    pub fn claimed_games_and_items_for_viewing<S: AsRef<str>>(&self, required: &[S]) -> ClaimedScope {
        resolver::resolve_for_viewing(&self.claims, required)
    }

    pub fn claimed_game_types_for_viewing<S: AsRef<str>>(&self, required: &[S]) -> Vec<GameType> {
        resolver::resolve_game_types_for_viewing(&self.claims, required)
    }

    pub fn game_types_for_game_servers(&self) -> Vec<GameType> {
        resolver::game_types_for_game_servers(&self.claims)
    }
}
