use serde::{Deserialize, Serialize};

/// Optional on-board equipment a unit may carry, filterable in the fleet list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Lidar,
    Camera,
    AutoBrake,
}

impl Capability {
    /// Get the capability code used in filter selections
    pub fn code(&self) -> &'static str {
        match self {
            Capability::Lidar => "lidar",
            Capability::Camera => "camera",
            Capability::AutoBrake => "autobrake",
        }
    }

    /// Get the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::Lidar => "LiDAR",
            Capability::Camera => "Camera",
            Capability::AutoBrake => "Auto-Brake",
        }
    }

    /// Get all capabilities
    pub fn all() -> Vec<Capability> {
        vec![Capability::Lidar, Capability::Camera, Capability::AutoBrake]
    }

    /// Parse from the filter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "lidar" => Some(Capability::Lidar),
            "camera" => Some(Capability::Camera),
            "autobrake" => Some(Capability::AutoBrake),
            _ => None,
        }
    }
}

impl ToString for Capability {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
