use serde::{Deserialize, Serialize};

/// Operational status of a fleet asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Idle,
    Down,
}

impl AssetStatus {
    /// Get the status code as it appears in the telemetry feed
    pub fn code(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Idle => "idle",
            AssetStatus::Down => "down",
        }
    }

    /// Get the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Idle => "Idle",
            AssetStatus::Down => "Down",
        }
    }

    /// Get all statuses
    pub fn all() -> Vec<AssetStatus> {
        vec![AssetStatus::Active, AssetStatus::Idle, AssetStatus::Down]
    }

    /// Parse from the feed code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(AssetStatus::Active),
            "idle" => Some(AssetStatus::Idle),
            "down" => Some(AssetStatus::Down),
            _ => None,
        }
    }
}

impl ToString for AssetStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
