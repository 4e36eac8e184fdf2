use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://ektakhokhar.github.io";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_STATIC_DIR: &str = "frontend";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
    pub static_dir: Option<String>,

    pub huggingface_api_key: Option<String>,
    pub inference_url: Option<String>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn allowed_origin(&self) -> &str {
        self.allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }

    pub fn static_dir(&self) -> &str {
        self.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    /// Empty when unset; upstream then rejects the call like any other
    /// bad token.
    pub fn huggingface_api_key(&self) -> &str {
        self.huggingface_api_key.as_deref().unwrap_or_default()
    }

    pub fn inference_url(&self) -> &str {
        self.inference_url
            .as_deref()
            .unwrap_or(DEFAULT_INFERENCE_URL)
            .trim_end_matches('/')
    }
}
