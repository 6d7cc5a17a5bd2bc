//! The user profile carried through generation and dashboard aggregation.
//!
//! StyleCast does not manage sessions or authentication; it receives a
//! profile from the host application and validates ownership against its id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user id. Cache entries are validated against this.
    pub id: String,

    /// Display name.
    pub display_name: String,

    /// Style goals the user set ("more color", "capsule wardrobe", ...).
    #[serde(default)]
    pub style_goals: Vec<String>,

    /// How many items the user is aiming to keep in rotation.
    /// Used by the dashboard's wardrobe-size ratio.
    #[serde(default = "default_wardrobe_size_target")]
    pub wardrobe_size_target: u32,
}

fn default_wardrobe_size_target() -> u32 {
    50
}

impl UserProfile {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            style_goals: Vec::new(),
            wardrobe_size_target: default_wardrobe_size_target(),
        }
    }

    pub fn with_style_goals(mut self, goals: Vec<String>) -> Self {
        self.style_goals = goals;
        self
    }
}
