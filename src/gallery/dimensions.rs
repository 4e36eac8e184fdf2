use super::errors::GalleryError;

pub const DEFAULT_BASE_SIZE: u32 = 512;

/// Inference models only accept sizes on this grid.
const ALIGNMENT: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    /// Parses `"w/h"`, e.g. `"16/9"`.
    pub fn parse(ratio: &str) -> Result<Self, GalleryError> {
        let invalid = || GalleryError::InvalidAspectRatio(ratio.to_string());

        let Some((width, height)) = ratio.split_once('/') else {
            return Err(invalid());
        };

        let (Ok(width), Ok(height)) = (width.trim().parse::<f64>(), height.trim().parse::<f64>())
        else {
            return Err(invalid());
        };

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

/// Scales the ratio to roughly `base_size²` pixels, then floors each side
/// to a multiple of 16.
pub fn image_dimensions(ratio: &str, base_size: u32) -> Result<Dimensions, GalleryError> {
    let ratio = AspectRatio::parse(ratio)?;
    let scale = f64::from(base_size) / (ratio.width * ratio.height).sqrt();

    Ok(Dimensions {
        width: align((ratio.width * scale).round()),
        height: align((ratio.height * scale).round()),
    })
}

fn align(side: f64) -> u32 {
    (side as u32 / ALIGNMENT) * ALIGNMENT
}
