use super::types::{AnalyzeImageRequest, AnalyzeImageResponse, ErrorResponse};
use crate::{llm::CompletionClient, prompt};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

pub async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.image_url.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "imageUrl is required".to_string(),
            }),
        ));
    }

    info!("Received analyze-image request for: {}", request.image_url);

    let completion = prompt::analysis_request(&request.image_url);
    match state
        .client
        .create_completion(completion)
        .await
        .and_then(|response| response.into_content())
    {
        Ok(result) => {
            info!("Successfully analyzed image: {}", request.image_url);
            Ok(Json(AnalyzeImageResponse { result }))
        }
        Err(e) => {
            error!("Failed to analyze image {}: {}", request.image_url, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
