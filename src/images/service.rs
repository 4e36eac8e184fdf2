use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::huggingface, dtos::generate_image_dto::GenerateImageDto,
    models::generation_result::GenerationResult, util::data_uri,
};

/// Calls the inference api once per requested image, one call at a time.
/// The first failure ends the batch and drops whatever was already fetched.
pub async fn generate_images(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<GenerationResult, ApiError> {
    tracing::info!(
        model = %dto.model,
        count = dto.count,
        width = dto.width,
        height = dto.height,
        "generating images"
    );

    let mut images = Vec::with_capacity(dto.count as usize);

    for index in 0..dto.count {
        tracing::debug!(index, "requesting image");

        let bytes = huggingface::service::generate_image(dto, &state.client, &state.envy).await?;
        images.push(data_uri::encode_png(&bytes));
    }

    Ok(GenerationResult { images })
}
