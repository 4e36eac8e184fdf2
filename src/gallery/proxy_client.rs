use serde::Deserialize;

use crate::images::{
    dtos::generate_image_dto::GenerateImageDto, models::generation_result::GenerationResult,
};

use super::errors::GalleryError;

const FALLBACK_ERROR: &str = "Failed to generate images";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the proxy's `/generate-image` endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate(
        &self,
        request: &GenerateImageDto,
    ) -> Result<GenerationResult, GalleryError> {
        let url = [self.base_url.as_str(), "/generate-image"].concat();

        let res = match self.client.post(&url).json(request).send().await {
            Ok(res) => res,
            Err(e) => return Err(GalleryError::Proxy(e.to_string())),
        };

        if !res.status().is_success() {
            let message = match res.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => None,
            };

            return Err(GalleryError::Proxy(
                message.unwrap_or(FALLBACK_ERROR.to_string()),
            ));
        }

        res.json::<GenerationResult>()
            .await
            .map_err(|e| GalleryError::Proxy(e.to_string()))
    }
}
