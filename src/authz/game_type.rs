use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported game titles. Declaration order is the canonical sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum GameType {
    Unknown,
    CallOfDuty2,
    CallOfDuty4,
    CallOfDuty5,
    Insurgency,
    Minecraft,
    Rust,
    Arma,
    Arma2,
    Arma3,
}

impl GameType {
    /// Every variant, in enumeration order.
    pub const ALL: [GameType; 10] = [
        GameType::Unknown,
        GameType::CallOfDuty2,
        GameType::CallOfDuty4,
        GameType::CallOfDuty5,
        GameType::Insurgency,
        GameType::Minecraft,
        GameType::Rust,
        GameType::Arma,
        GameType::Arma2,
        GameType::Arma3,
    ];

    pub fn all() -> Vec<GameType> {
        Self::ALL.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Unknown => "Unknown",
            GameType::CallOfDuty2 => "CallOfDuty2",
            GameType::CallOfDuty4 => "CallOfDuty4",
            GameType::CallOfDuty5 => "CallOfDuty5",
            GameType::Insurgency => "Insurgency",
            GameType::Minecraft => "Minecraft",
            GameType::Rust => "Rust",
            GameType::Arma => "Arma",
            GameType::Arma2 => "Arma2",
            GameType::Arma3 => "Arma3",
        }
    }

    /// Exact, case-sensitive lookup by variant name.
    pub fn from_name(name: &str) -> Option<GameType> {
        static BY_NAME: OnceLock<HashMap<&'static str, GameType>> = OnceLock::new();
        BY_NAME
            .get_or_init(|| GameType::ALL.iter().map(|game| (game.as_str(), *game)).collect())
            .get(name)
            .copied()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
