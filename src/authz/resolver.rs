//! Claims-to-scope resolution.
//!
//! Restricted mode returns exactly the game types and item ids named by the
//! qualifying claims, and it is used to gate mutating actions. Viewing mode
//! returns every game type as soon as one qualifying claim exists, and it is
//! used for read-only dashboards. Both modes treat a `SeniorAdmin` claim as a
//! qualifying claim whatever `required` contains.
//!
//! Claim values that are neither a game type name nor a GUID are ignored.

use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::claim_types;
use super::game_type::GameType;
use super::principal::Claim;

/// Game types and item ids a principal holds for one authorization check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClaimedScope {
    /// Distinct, in enumeration order.
    pub game_types: Vec<GameType>,
    /// Distinct, sorted by value.
    pub item_ids: Vec<Uuid>,
}

impl ClaimedScope {
    pub fn is_empty(&self) -> bool {
        self.game_types.is_empty() && self.item_ids.is_empty()
    }

    pub fn contains_item(&self, item_id: &Uuid) -> bool {
        self.item_ids.contains(item_id)
    }
}

fn has_senior_admin(claims: &[Claim]) -> bool {
    claims
        .iter()
        .any(|claim| claim.claim_type == claim_types::SENIOR_ADMIN)
}

fn qualifying<'a, S: AsRef<str>>(
    claims: &'a [Claim],
    required: &'a [S],
) -> impl Iterator<Item = &'a Claim> + 'a {
    claims
        .iter()
        .filter(move |claim| required.iter().any(|r| r.as_ref() == claim.claim_type))
}

/// Exact scopes named by the qualifying claims.
pub fn resolve_restricted<S: AsRef<str>>(claims: &[Claim], required: &[S]) -> ClaimedScope {
    let mut game_types = BTreeSet::new();
    let mut item_ids = BTreeSet::new();

    if has_senior_admin(claims) {
        game_types.extend(GameType::ALL);
    }

    for claim in qualifying(claims, required) {
        // A value may parse as both; each attempt is independent.
        if let Some(game_type) = claim.game_type() {
            game_types.insert(game_type);
        }
        if let Some(item_id) = claim.item_id() {
            item_ids.insert(item_id);
        }
    }

    let scope = ClaimedScope {
        game_types: game_types.into_iter().collect(),
        item_ids: item_ids.into_iter().collect(),
    };

    tracing::debug!(
        game_types = scope.game_types.len(),
        item_ids = scope.item_ids.len(),
        "resolved restricted scope"
    );

    scope
}

/// Restricted game types only.
pub fn resolve_game_types<S: AsRef<str>>(claims: &[Claim], required: &[S]) -> Vec<GameType> {
    resolve_restricted(claims, required).game_types
}

/// See-all scope: any qualifying claim (or SeniorAdmin) grants every game
/// type. Item ids still come only from the qualifying claims themselves.
pub fn resolve_for_viewing<S: AsRef<str>>(claims: &[Claim], required: &[S]) -> ClaimedScope {
    let mut item_ids = BTreeSet::new();
    let mut has_qualifying_claim = false;

    for claim in qualifying(claims, required) {
        has_qualifying_claim = true;
        if let Some(item_id) = claim.item_id() {
            item_ids.insert(item_id);
        }
    }

    let has_qualifying_claim = has_qualifying_claim || has_senior_admin(claims);

    let scope = if has_qualifying_claim {
        ClaimedScope {
            game_types: GameType::all(),
            item_ids: item_ids.into_iter().collect(),
        }
    } else {
        ClaimedScope::default()
    };

    tracing::debug!(
        game_types = scope.game_types.len(),
        item_ids = scope.item_ids.len(),
        "resolved viewing scope"
    );

    scope
}

/// Viewing game types only.
pub fn resolve_game_types_for_viewing<S: AsRef<str>>(claims: &[Claim], required: &[S]) -> Vec<GameType> {
    if has_senior_admin(claims) || qualifying(claims, required).next().is_some() {
        GameType::all()
    } else {
        Vec::new()
    }
}

/// Game types whose servers the principal may manage.
pub fn game_types_for_game_servers(claims: &[Claim]) -> Vec<GameType> {
    resolve_game_types(claims, &[claim_types::SENIOR_ADMIN, claim_types::HEAD_ADMIN])
}
