use serde::{Deserialize, Serialize};

/// Clubs are keyed by small integer ids assigned by the league data files.
pub type ClubId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    /// Default venue for home fixtures.
    pub home_ground: String,
    /// Scheduling tier: 1 = big-market club preferred for marquee slots.
    #[serde(default = "default_tier")]
    pub tier: u8,
}

fn default_tier() -> u8 {
    2
}

impl Club {
    pub fn new(id: ClubId, name: &str, home_ground: &str) -> Self {
        Self { id, name: name.to_string(), home_ground: home_ground.to_string(), tier: 2 }
    }
}
