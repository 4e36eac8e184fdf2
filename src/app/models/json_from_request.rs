use axum::Json;
use axum_macros::FromRequest;

use super::api_error::ApiError;

/// `Json` whose rejections (bad syntax, wrong content type, missing
/// fields) are answered as `{ "error": ... }` like every other failure.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
