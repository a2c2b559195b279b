use crate::models::image::{GenerationMode, ImageSize};
use serde::{Deserialize, Serialize};

/// A single past generation. Immutable once created; owned by the history
/// store after creation. The id is caller-supplied (epoch-ms derived) and
/// never validated for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: String,
    pub prompt: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub size: ImageSize,
    pub mode: GenerationMode,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl GenerationRecord {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        image_url: impl Into<String>,
        size: ImageSize,
        mode: GenerationMode,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            image_url: image_url.into(),
            size,
            mode,
            created_at,
        }
    }
}

/// The persisted slot shape: `{"results": [...]}`, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationHistory {
    #[serde(default)]
    pub results: Vec<GenerationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = GenerationRecord::new(
            "1754640000000",
            "a quiet library",
            "https://cdn.example.com/img.png",
            ImageSize::Square,
            GenerationMode::Normal,
            1754640000000,
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["imageUrl"], "https://cdn.example.com/img.png");
        assert_eq!(value["createdAt"], 1754640000000i64);
        assert_eq!(value["size"], "1024x1024");
        assert_eq!(value["mode"], "normal");
    }

    #[test]
    fn history_tolerates_missing_results_field() {
        let history: GenerationHistory = serde_json::from_str("{}").unwrap();
        assert!(history.results.is_empty());
    }
}
