use crate::images::dtos::generate_image_dto::GenerateImageDto;

use super::{
    dimensions::{image_dimensions, DEFAULT_BASE_SIZE},
    errors::GalleryError,
    theme::Theme,
};

pub const DEFAULT_ASPECT_RATIO: &str = "1/1";

/// Raw values of the page controls, as read at event time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub model: String,
    pub count: String,
    pub ratio: String,
    pub prompt: String,
    pub theme: Theme,
}

impl FormState {
    /// Reads the leading digits of the control, so `"3 images"` is 3.
    /// Falls back to one image when there is nothing usable.
    pub fn image_count(&self) -> u32 {
        let count = self.count.trim_start();
        let digits = count
            .find(|c: char| !c.is_ascii_digit())
            .map_or(count, |end| &count[..end]);

        match digits.parse::<u32>() {
            Ok(count) if count > 0 => count,
            _ => 1,
        }
    }

    pub fn aspect_ratio(&self) -> &str {
        match self.ratio.trim() {
            "" => DEFAULT_ASPECT_RATIO,
            ratio => ratio,
        }
    }

    pub fn to_request(&self) -> Result<GenerateImageDto, GalleryError> {
        let prompt = self.prompt.trim();

        if prompt.is_empty() {
            return Err(GalleryError::EmptyPrompt);
        }

        let dimensions = image_dimensions(self.aspect_ratio(), DEFAULT_BASE_SIZE)?;

        Ok(GenerateImageDto {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            width: dimensions.width,
            height: dimensions.height,
            count: self.image_count(),
        })
    }
}
