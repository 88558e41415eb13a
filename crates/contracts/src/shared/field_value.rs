use serde::{Deserialize, Serialize};

/// Scalar value of a single asset field, used for key-based field access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Boolean flag
    Flag(bool),
}
