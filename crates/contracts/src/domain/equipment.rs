use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One equipment class fielded by the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentType {
    /// Class code, also the id prefix of its units
    pub code: String,
    /// Display name of the class
    pub name: String,
}

/// Catalog of the equipment classes known to the portal, backing the
/// type filter options in the fleet list
pub struct EquipmentCatalog {
    types: Vec<EquipmentType>,
}

impl EquipmentCatalog {
    fn build() -> Self {
        let entry = |code: &str, name: &str| EquipmentType {
            code: code.to_string(),
            name: name.to_string(),
        };
        Self {
            types: vec![
                entry("TSD", "Titan Spike Driver"),
                entry("GSP", "Gorilla Spike Puller"),
                entry("DSP", "Dragon Spike Puller"),
                entry("RRL", "Raptor Rail Lifter"),
                entry("BTN", "BTN Spike Driver"),
            ],
        }
    }

    /// All known classes in display order
    pub fn all(&self) -> &[EquipmentType] {
        &self.types
    }

    /// Look up a class by its code
    pub fn find_by_code(&self, code: &str) -> Option<&EquipmentType> {
        self.types.iter().find(|t| t.code == code)
    }
}

pub static EQUIPMENT_CATALOG: Lazy<EquipmentCatalog> = Lazy::new(EquipmentCatalog::build);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_known_classes() {
        assert_eq!(EQUIPMENT_CATALOG.all().len(), 5);
    }

    #[test]
    fn test_find_by_code() {
        let found = EQUIPMENT_CATALOG.find_by_code("TSD").unwrap();
        assert_eq!(found.name, "Titan Spike Driver");
        assert!(EQUIPMENT_CATALOG.find_by_code("XYZ").is_none());
    }
}
