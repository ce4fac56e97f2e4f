use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::authz::{AccessCheck, ClaimedScope, GameType, ScopeMode};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScopeQuery {
    /// Comma-separated claim types that qualify for this check.
    #[param(example = "HeadAdmin,GameAdmin")]
    pub required: Option<String>,
    /// `restricted` (default) or `viewing`.
    #[param(example = "viewing")]
    pub mode: Option<String>,
}

impl ScopeQuery {
    pub fn required_claim_types(&self) -> Vec<String> {
        self.required
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|claim_type| !claim_type.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScopeResponse {
    pub mode: ScopeMode,
    #[schema(example = json!(["HeadAdmin"]))]
    pub required: Vec<String>,
    pub game_types: Vec<GameType>,
    pub item_ids: Vec<Uuid>,
}

impl ScopeResponse {
    pub fn new(mode: ScopeMode, required: Vec<String>, scope: ClaimedScope) -> Self {
        Self {
            mode,
            required,
            game_types: scope.game_types,
            item_ids: scope.item_ids,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckSummary {
    #[schema(example = "server-admin")]
    pub check: String,
    pub mode: ScopeMode,
    pub required_claim_types: Vec<String>,
}

impl From<AccessCheck> for CheckSummary {
    fn from(check: AccessCheck) -> Self {
        Self {
            check: check.slug().to_string(),
            mode: check.mode(),
            required_claim_types: check
                .required_claim_types()
                .iter()
                .map(|claim_type| claim_type.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckResponse {
    #[schema(example = "server-admin")]
    pub check: String,
    pub mode: ScopeMode,
    /// False when no claim grants anything for this check.
    pub granted: bool,
    pub game_types: Vec<GameType>,
    pub item_ids: Vec<Uuid>,
}

impl CheckResponse {
    pub fn new(check: AccessCheck, scope: ClaimedScope) -> Self {
        Self {
            check: check.slug().to_string(),
            mode: check.mode(),
            granted: !scope.is_empty(),
            game_types: scope.game_types,
            item_ids: scope.item_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_claim_types_trims_and_skips_empty() {
        let query = ScopeQuery {
            required: Some(" HeadAdmin, ,GameAdmin,".to_string()),
            mode: None,
        };
        assert_eq!(query.required_claim_types(), vec!["HeadAdmin", "GameAdmin"]);
        assert!(ScopeQuery::default().required_claim_types().is_empty());
    }
}
