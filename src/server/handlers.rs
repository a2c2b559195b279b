use crate::{
    config,
    error::QigenError,
    models::{
        ErrorResponse, GenerationHistory, GenerationRecord, GenerationRequest,
        GenerationResponse, SaveKeyRequest, SaveKeyResponse,
    },
    server::AppState,
};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

fn failure(err: QigenError, label: &str) -> HttpResponse {
    log::error!("{}: {}", label, err);

    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match &err {
        QigenError::ValidationError(msg) => ErrorResponse::new(msg.clone()),
        other => ErrorResponse::new(label).with_details(other.to_string()),
    };

    HttpResponse::build(status).json(body)
}

/// GET /config
pub async fn get_config(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dashscope.status())
}

/// POST /config
pub async fn save_config(
    state: web::Data<AppState>,
    body: web::Json<SaveKeyRequest>,
) -> HttpResponse {
    match config::save_api_key(&body.api_key, &state.env_file) {
        Ok(message) => HttpResponse::Ok().json(SaveKeyResponse {
            success: true,
            message,
        }),
        Err(e) => failure(e, "Failed to save API key"),
    }
}

/// POST /generate
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerationRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    let prompt = request.prompt.clone();

    let client = match state.require_client() {
        Ok(client) => client,
        Err(e) => return failure(e, "Image generation failed"),
    };

    match client.image().generate(request).await {
        Ok(response) => {
            record_generation(&state, &prompt, &response).await;
            HttpResponse::Ok().json(response)
        }
        Err(e) => failure(e, "Image generation failed"),
    }
}

/// One history record per returned image, ids derived from the current
/// epoch-ms timestamp.
async fn record_generation(state: &AppState, prompt: &str, response: &GenerationResponse) {
    let now = Utc::now().timestamp_millis();

    for (offset, image) in response.images.iter().enumerate() {
        let record = GenerationRecord::new(
            (now + offset as i64).to_string(),
            prompt,
            &image.image_url,
            image.size,
            response.mode,
            now,
        );
        state.history.add_result(record).await;
    }
}

/// GET /history
pub async fn get_history(state: web::Data<AppState>) -> HttpResponse {
    let results = state.history.get_history().await;
    HttpResponse::Ok().json(GenerationHistory { results })
}

/// DELETE /history/{id}
pub async fn delete_history_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    state.history.delete_result(&path.into_inner()).await;
    HttpResponse::Ok().json(json!({ "success": true }))
}

/// DELETE /history
pub async fn clear_history(state: web::Data<AppState>) -> HttpResponse {
    state.history.clear_history().await;
    HttpResponse::Ok().json(json!({ "success": true }))
}
