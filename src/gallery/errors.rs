use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    EmptyPrompt,
    InvalidAspectRatio(String),
    Proxy(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrompt => write!(f, "Please enter a prompt to generate images."),
            Self::InvalidAspectRatio(ratio) => write!(f, "Invalid aspect ratio: {}", ratio),
            Self::Proxy(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for GalleryError {}
