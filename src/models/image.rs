use serde::{Deserialize, Serialize};

/// The four user-facing size labels. `Cover` (900x500) is what cover mode
/// records in history; DashScope never sees these strings directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Landscape,
    #[serde(rename = "1024x1792")]
    Portrait,
    #[serde(rename = "900x500")]
    Cover,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Landscape => "1792x1024",
            Self::Portrait => "1024x1792",
            Self::Cover => "900x500",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Normal,
    Cover,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Cover => write!(f, "cover"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub size: ImageSize,
    #[serde(default)]
    pub mode: GenerationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub size: ImageSize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub images: Vec<GeneratedImage>,
    pub mode: GenerationMode,
}

// --- DashScope wire types ---
//
// One serde decode per exchange; a response that doesn't match this shape
// is a ResponseError, not a silently-missing nested field.

#[derive(Debug, Clone, Serialize)]
pub struct DashScopeRequest {
    pub model: String,
    pub input: DashScopeInput,
    pub parameters: DashScopeParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashScopeInput {
    pub messages: Vec<DashScopeMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashScopeMessage {
    pub role: String,
    pub content: Vec<DashScopeRequestContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashScopeRequestContent {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashScopeParameters {
    pub negative_prompt: String,
    pub prompt_extend: bool,
    pub watermark: bool,
    pub size: String,
}

impl DashScopeRequest {
    /// Builds a `qwen-image-plus` text-to-image request carrying the mapped
    /// provider size and the effective prompt.
    pub fn text_to_image(prompt: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            model: "qwen-image-plus".to_string(),
            input: DashScopeInput {
                messages: vec![DashScopeMessage {
                    role: "user".to_string(),
                    content: vec![DashScopeRequestContent {
                        text: prompt.into(),
                    }],
                }],
            },
            parameters: DashScopeParameters {
                negative_prompt: String::new(),
                prompt_extend: true,
                watermark: false,
                size: size.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashScopeResponse {
    /// Present (with `message`) when the provider rejects the request
    /// inside a 200 response.
    pub code: Option<String>,
    pub message: Option<String>,
    pub output: Option<DashScopeOutput>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashScopeOutput {
    #[serde(default)]
    pub choices: Vec<DashScopeChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashScopeChoice {
    pub message: DashScopeResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashScopeResponseMessage {
    #[serde(default)]
    pub content: Vec<DashScopeResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashScopeResponseContent {
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_round_trips_through_serde() {
        let json = serde_json::to_string(&ImageSize::Landscape).unwrap();
        assert_eq!(json, "\"1792x1024\"");

        let size: ImageSize = serde_json::from_str("\"900x500\"").unwrap();
        assert_eq!(size, ImageSize::Cover);
    }

    #[test]
    fn generation_request_defaults_size_and_mode() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"prompt": "a quiet library"}"#).unwrap();
        assert_eq!(request.size, ImageSize::Square);
        assert_eq!(request.mode, GenerationMode::Normal);
    }

    #[test]
    fn text_to_image_request_serializes_expected_shape() {
        let request = DashScopeRequest::text_to_image("a red fox", "1328*1328");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "qwen-image-plus");
        assert_eq!(value["input"]["messages"][0]["role"], "user");
        assert_eq!(value["input"]["messages"][0]["content"][0]["text"], "a red fox");
        assert_eq!(value["parameters"]["size"], "1328*1328");
        assert_eq!(value["parameters"]["watermark"], false);
        assert_eq!(value["parameters"]["prompt_extend"], true);
        assert_eq!(value["parameters"]["negative_prompt"], "");
    }

    #[test]
    fn response_decodes_nested_image_url() {
        let body = r#"{
            "request_id": "abc-123",
            "output": {
                "choices": [
                    {"message": {"content": [{"image": "https://cdn.example.com/img.png"}]}}
                ]
            }
        }"#;

        let response: DashScopeResponse = serde_json::from_str(body).unwrap();
        assert!(response.code.is_none());
        let output = response.output.unwrap();
        assert_eq!(
            output.choices[0].message.content[0].image.as_deref(),
            Some("https://cdn.example.com/img.png")
        );
    }
}
