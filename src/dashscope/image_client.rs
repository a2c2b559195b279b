use crate::{
    dashscope::mapper,
    error::{QigenError, Result},
    models::{
        DashScopeRequest, DashScopeResponse, GeneratedImage, GenerationRequest,
        GenerationResponse,
    },
};
use reqwest::Client;

#[derive(Clone, Debug)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl ImageClient {
    pub fn new(client: Client, api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Generates the image pair for one user request. The prompt is
    /// validated before anything goes upstream; the two calls run
    /// concurrently and both must succeed, otherwise the whole operation
    /// fails with no partial result.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        if request.prompt.trim().is_empty() {
            return Err(QigenError::ValidationError(
                "Prompt must not be empty".into(),
            ));
        }

        let size = mapper::provider_size(request.mode, request.size);
        let prompt = mapper::effective_prompt(request.mode, &request.prompt);
        let display_size = mapper::display_size(request.mode, request.size);

        log::info!(
            "Generating image pair: mode={}, provider_size={}",
            request.mode,
            size
        );

        let (first, second) = futures::future::try_join(
            self.generate_single(&prompt, size),
            self.generate_single(&prompt, size),
        )
        .await?;

        Ok(GenerationResponse {
            images: vec![
                GeneratedImage {
                    image_url: first,
                    size: display_size,
                },
                GeneratedImage {
                    image_url: second,
                    size: display_size,
                },
            ],
            mode: request.mode,
        })
    }

    /// One bearer-authenticated POST to DashScope; returns the hosted
    /// image URL. No retries.
    pub async fn generate_single(&self, prompt: &str, size: &str) -> Result<String> {
        let payload = DashScopeRequest::text_to_image(prompt, size);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| QigenError::RequestError(format!("DashScope request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("DashScope API error: {} {}", status, body);
            return Err(QigenError::UpstreamError(format!(
                "DashScope call failed: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        let decoded: DashScopeResponse = response.json().await.map_err(|e| {
            QigenError::ResponseError(format!("Failed to decode DashScope response: {}", e))
        })?;

        extract_image_url(decoded)
    }
}

/// Pulls the image URL out of a decoded response, surfacing provider
/// error codes that arrive inside a success-status body.
pub fn extract_image_url(response: DashScopeResponse) -> Result<String> {
    if let Some(code) = response.code.filter(|code| code != "200") {
        let message = response.message.unwrap_or_else(|| code.clone());
        log::error!("DashScope rejected the request: {} ({})", message, code);
        return Err(QigenError::UpstreamError(message));
    }

    response
        .output
        .and_then(|output| output.choices.into_iter().next())
        .and_then(|choice| choice.message.content.into_iter().find_map(|c| c.image))
        .ok_or_else(|| QigenError::ResponseError("No image URL in DashScope response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationMode, ImageSize};

    fn client() -> ImageClient {
        // Points at a closed port; tests below never reach the network.
        ImageClient::new(Client::new(), "sk-test", "http://127.0.0.1:1/api/v1")
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_before_any_upstream_call() {
        let request = GenerationRequest {
            prompt: "   ".to_string(),
            size: ImageSize::Square,
            mode: GenerationMode::Normal,
        };

        let err = client().generate(request).await.unwrap_err();
        assert!(matches!(err, QigenError::ValidationError(_)));
    }

    #[test]
    fn extract_returns_the_url_on_success() {
        let response: DashScopeResponse = serde_json::from_str(
            r#"{
                "output": {
                    "choices": [
                        {"message": {"content": [{"image": "https://cdn.example.com/a.png"}]}}
                    ]
                },
                "request_id": "req-1"
            }"#,
        )
        .unwrap();

        let url = extract_image_url(response).unwrap();
        assert_eq!(url, "https://cdn.example.com/a.png");
    }

    #[test]
    fn extract_surfaces_provider_error_codes() {
        let response: DashScopeResponse = serde_json::from_str(
            r#"{"code": "InvalidApiKey", "message": "Invalid API-key provided.", "request_id": "req-2"}"#,
        )
        .unwrap();

        let err = extract_image_url(response).unwrap_err();
        match err {
            QigenError::UpstreamError(message) => {
                assert_eq!(message, "Invalid API-key provided.")
            }
            other => panic!("expected UpstreamError, got {:?}", other),
        }
    }

    #[test]
    fn extract_fails_on_missing_image_field() {
        let response: DashScopeResponse = serde_json::from_str(
            r#"{"output": {"choices": [{"message": {"content": [{}]}}]}}"#,
        )
        .unwrap();

        let err = extract_image_url(response).unwrap_err();
        assert!(matches!(err, QigenError::ResponseError(_)));
    }

    #[test]
    fn extract_fails_on_empty_output() {
        let response: DashScopeResponse = serde_json::from_str(r#"{"output": {"choices": []}}"#).unwrap();
        let err = extract_image_url(response).unwrap_err();
        assert!(matches!(err, QigenError::ResponseError(_)));
    }
}
