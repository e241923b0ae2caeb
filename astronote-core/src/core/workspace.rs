use serde::{Deserialize, Serialize};

/// A top-level container owning notebooks and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub color: Option<String>,
    pub created_at: i64,
    pub modified_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_serializes_camel_case() {
        let ws = Workspace {
            id: "w1".to_string(),
            name: "Personal".to_string(),
            emoji: None,
            color: Some("#1d4ed8".to_string()),
            created_at: 1234567890,
            modified_at: 1234567890,
        };
        let json = serde_json::to_string(&ws).unwrap();
        assert!(json.contains("\"createdAt\":1234567890"));
        assert!(json.contains("\"color\":\"#1d4ed8\""));
    }
}
