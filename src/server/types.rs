use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeImageRequest {
    // A missing field and an empty field get the same validation error, so
    // absence deserializes to an empty string instead of rejecting the body.
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
