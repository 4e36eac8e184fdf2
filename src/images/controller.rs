use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generation_result::GenerationResult, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GenerationResult>, ApiError> {
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::generate_images(&dto, &state).await {
            Ok(result) => Ok(Json(result)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ImagesApiError::InvalidRequest(e.to_string()).value()),
    }
}
