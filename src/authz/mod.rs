//! Authorization module - claims to scope resolution and enforcement
//!
//! This module derives, from a principal's claims, which game types and
//! items (server/monitor GUIDs) the principal may act on or view:
//! - Restricted scopes for mutating actions
//! - Viewing ("see-all") scopes for read-only pages
//! - SeniorAdmin super-scope
//! - Configurable enforcement modes (off/advisory/strict)

pub mod checks;
pub mod claim_types;
mod game_type;
mod principal;
pub mod resolver;

pub use checks::{AccessCheck, ScopeMode};
pub use game_type::GameType;
pub use principal::{Claim, Principal};
pub use resolver::ClaimedScope;

use crate::errors::AppError;

/// Authorization enforcement mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthzMode {
    /// No enforcement; empty scopes are returned as-is (development mode)
    #[default]
    Off,
    /// Log empty scopes but allow requests (testing mode)
    Advisory,
    /// Enforce 403 on empty scopes (production mode)
    Strict,
}

impl AuthzMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "advisory" => AuthzMode::Advisory,
            "strict" => AuthzMode::Strict,
            _ => AuthzMode::Off,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(&std::env::var("AUTHZ_MODE").unwrap_or_default())
    }

    /// Apply the no-access policy to a resolved check.
    pub fn enforce(
        &self,
        principal: &Principal,
        check: AccessCheck,
        scope: ClaimedScope,
    ) -> Result<ClaimedScope, AppError> {
        if !scope.is_empty() {
            tracing::debug!(
                subject = %principal.subject,
                check = %check,
                game_types = scope.game_types.len(),
                item_ids = scope.item_ids.len(),
                "access granted"
            );
            return Ok(scope);
        }

        match self {
            AuthzMode::Off => Ok(scope),
            AuthzMode::Advisory => {
                tracing::warn!(
                    subject = %principal.subject,
                    check = %check,
                    "no claim grants access (advisory)"
                );
                Ok(scope)
            }
            AuthzMode::Strict => {
                tracing::info!(subject = %principal.subject, check = %check, "access denied");
                Err(AppError::forbidden(format!("no claim grants '{check}'")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(AuthzMode::parse("strict"), AuthzMode::Strict);
        assert_eq!(AuthzMode::parse(" Advisory "), AuthzMode::Advisory);
        assert_eq!(AuthzMode::parse(""), AuthzMode::Off);
        assert_eq!(AuthzMode::parse("bogus"), AuthzMode::Off);
    }

    #[test]
    fn test_strict_rejects_empty_scope() {
        let principal = Principal::new("1");
        let result = AuthzMode::Strict.enforce(&principal, AccessCheck::ServerAdmin, ClaimedScope::default());
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_advisory_and_off_pass_empty_scope() {
        let principal = Principal::new("1");
        for mode in [AuthzMode::Off, AuthzMode::Advisory] {
            let scope = mode
                .enforce(&principal, AccessCheck::Demos, ClaimedScope::default())
                .unwrap();
            assert!(scope.is_empty());
        }
    }

    #[test]
    fn test_strict_allows_non_empty_scope() {
        let principal = Principal::new("1").with_claim(claim_types::HEAD_ADMIN, "Rust");
        let scope = AccessCheck::GameServers.resolve(&principal);
        let scope = AuthzMode::Strict
            .enforce(&principal, AccessCheck::GameServers, scope)
            .unwrap();
        assert_eq!(scope.game_types, vec![GameType::Rust]);
    }
}
