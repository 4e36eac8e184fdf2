use bytes::Bytes;
use reqwest::header;

use crate::{
    app::{envy::Envy, models::api_error::ApiError},
    images::{dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError},
};

use super::{
    config::model_url,
    models::input_spec::{InputSpec, InputSpecParams},
};

const USE_CACHE_HEADER: &str = "x-use-cache";

/// Runs one text-to-image inference and returns the raw image bytes.
pub async fn generate_image(
    dto: &GenerateImageDto,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<Bytes, ApiError> {
    let url = model_url(envy.inference_url(), &dto.model);
    let input_spec = provide_input_spec(dto);

    let result = client
        .post(&url)
        .bearer_auth(envy.huggingface_api_key())
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.essence_str())
        .header(USE_CACHE_HEADER, "false")
        .json(&input_spec)
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e, %url, "inference request failed");
            return Err(ImagesApiError::UpstreamUnreachable(e.to_string()).value());
        }
    };

    let status = res.status();

    if !status.is_success() {
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };
        tracing::error!(%status, %text, "inference api returned an error");
        return Err(ImagesApiError::UpstreamRejected(text).value());
    }

    match res.bytes().await {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::error!(%e, "failed to read inference response body");
            Err(ImagesApiError::UpstreamUnreachable(e.to_string()).value())
        }
    }
}

fn provide_input_spec(dto: &GenerateImageDto) -> InputSpec {
    InputSpec {
        inputs: dto.prompt.to_string(),
        parameters: InputSpecParams {
            width: dto.width,
            height: dto.height,
        },
    }
}
