use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(
        min = 1,
        max = 200,
        message = "model must be between 1 and 200 characters."
    ))]
    pub model: String,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "prompt must be between 1 and 2000 characters."
    ))]
    pub prompt: String,
    #[validate(range(min = 16, message = "width must be at least 16."))]
    pub width: u32,
    #[validate(range(min = 16, message = "height must be at least 16."))]
    pub height: u32,
    #[validate(range(min = 1, message = "count must be at least 1."))]
    pub count: u32,
}

impl GenerateImageDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            model: self.model.trim().to_string(),
            prompt: self.prompt.trim().to_string(),
            width: self.width,
            height: self.height,
            count: self.count,
        };
    }
}
