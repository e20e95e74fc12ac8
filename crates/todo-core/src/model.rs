//! To-Do Model
//!
//! The persisted record. Field names on the wire are kept stable so
//! existing `localStorage` data keeps loading.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique identifier, assigned from the store counter
    pub id: u32,
    /// Trimmed, non-empty text
    pub content: String,
    /// Creation timestamp, never changed afterwards
    #[serde(rename = "regDate")]
    pub registered_at: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(id: u32, content: String, registered_at: String) -> Self {
        Self {
            id,
            content,
            registered_at,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = TodoRecord::new(1, "buy milk".to_string(), "2024-01-01 09:00:00".to_string());
        assert_eq!(record.id, 1);
        assert!(!record.completed);
    }

    #[test]
    fn test_wire_field_names() {
        let record = TodoRecord::new(3, "walk dog".to_string(), "2024-01-01 09:00:00".to_string());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["regDate"], "2024-01-01 09:00:00");
        assert_eq!(json["completed"], false);
        assert!(json.get("registered_at").is_none());
    }

    #[test]
    fn test_missing_completed_defaults_false() {
        let raw = r#"{"id":7,"content":"x","regDate":"2024-01-01 09:00:00"}"#;
        let record: TodoRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 7);
        assert!(!record.completed);
    }
}
