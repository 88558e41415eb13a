use serde::{Deserialize, Serialize};

use crate::enums::asset_status::AssetStatus;
use crate::enums::capability::Capability;
use crate::shared::field_value::FieldValue;

/// One telemetry record describing a maintenance-of-way unit.
///
/// Records arrive from the feed fully formed and are treated as read-only
/// downstream; nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unit identifier in `TYPECODE-NNNN` form, e.g. `TSD-1247`
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(rename = "typeCode")]
    pub type_code: String,
    pub status: AssetStatus,
    pub location: String,
    #[serde(rename = "mileMarker")]
    pub mile_marker: String,
    /// Assigned operator; the feed clears this while a unit is down
    #[serde(default)]
    pub operator: Option<String>,
    /// Utilization percent, 0-100
    pub utilization: u32,
    // The feed generator spells this key all-lowercase, hence the alias.
    #[serde(rename = "cyclesToday", alias = "cyclestoday")]
    pub cycles_today: u32,
    #[serde(rename = "engineHours")]
    pub engine_hours: u32,
    /// Fuel level percent, 0-100
    #[serde(rename = "fuelLevel")]
    pub fuel_level: u32,
    #[serde(rename = "hasLidar")]
    pub has_lidar: bool,
    #[serde(rename = "hasCamera")]
    pub has_camera: bool,
    #[serde(rename = "hasAutoBrake")]
    pub has_auto_brake: bool,
    #[serde(rename = "alertCount")]
    pub alert_count: u32,
    /// Display string, not a parseable timestamp
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
    #[serde(rename = "nextService")]
    pub next_service: String,
}

impl AssetRecord {
    /// Case-insensitive substring match over id, type name, location and
    /// operator. A unit without an operator is simply skipped for that
    /// field. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.id.to_lowercase().contains(&query)
            || self.type_name.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self
                .operator
                .as_ref()
                .map(|operator| operator.to_lowercase().contains(&query))
                .unwrap_or(false)
    }

    /// Whether the unit carries the given on-board capability
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::Lidar => self.has_lidar,
            Capability::Camera => self.has_camera,
            Capability::AutoBrake => self.has_auto_brake,
        }
    }

    /// Scalar value of a field by key, `None` for unknown keys.
    ///
    /// `status` is exposed as its feed code; a missing `operator` reads
    /// as empty text. Every key yields the same value shape on every
    /// record, so any field can serve as a sort key.
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Text(self.id.clone()),
            "type" => FieldValue::Text(self.type_name.clone()),
            "type_code" => FieldValue::Text(self.type_code.clone()),
            "status" => FieldValue::Text(self.status.code().to_string()),
            "location" => FieldValue::Text(self.location.clone()),
            "mile_marker" => FieldValue::Text(self.mile_marker.clone()),
            "operator" => FieldValue::Text(self.operator.clone().unwrap_or_default()),
            "utilization" => FieldValue::Integer(self.utilization as i64),
            "cycles_today" => FieldValue::Integer(self.cycles_today as i64),
            "engine_hours" => FieldValue::Integer(self.engine_hours as i64),
            "fuel_level" => FieldValue::Integer(self.fuel_level as i64),
            "alert_count" => FieldValue::Integer(self.alert_count as i64),
            "last_update" => FieldValue::Text(self.last_update.clone()),
            "next_service" => FieldValue::Text(self.next_service.clone()),
            "has_lidar" => FieldValue::Flag(self.has_lidar),
            "has_camera" => FieldValue::Flag(self.has_camera),
            "has_auto_brake" => FieldValue::Flag(self.has_auto_brake),
            _ => return None,
        };
        Some(value)
    }

    /// Shape checks applied when a feed is ingested
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id cannot be empty".into());
        }
        if self.type_name.trim().is_empty() {
            return Err("type cannot be empty".into());
        }
        if self.type_code.trim().is_empty() {
            return Err("typeCode cannot be empty".into());
        }
        if self.location.trim().is_empty() {
            return Err("location cannot be empty".into());
        }
        match self.id.split_once('-') {
            Some((prefix, digits))
                if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) =>
            {
                if prefix != self.type_code {
                    return Err(format!(
                        "id prefix {} does not match typeCode {}",
                        prefix, self.type_code
                    ));
                }
            }
            _ => {
                return Err(format!("id {} is not in TYPECODE-NNNN form", self.id));
            }
        }
        if self.utilization > 100 {
            return Err(format!("utilization {} is out of range", self.utilization));
        }
        if self.fuel_level > 100 {
            return Err(format!("fuelLevel {} is out of range", self.fuel_level));
        }
        Ok(())
    }
}
