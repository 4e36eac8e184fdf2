use serde::{Deserialize, Serialize};

/// Images in the order they were requested, each a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub images: Vec<String>,
}
