use std::{path::PathBuf, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::post,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::app::envy::{Envy, DEFAULT_ALLOWED_ORIGIN};

pub mod app;
pub mod gallery;
pub mod images;

#[cfg(test)]
mod testing;

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub envy: Arc<Envy>,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            client: reqwest::Client::new(),
            envy: Arc::new(envy),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let static_dir = PathBuf::from(state.envy.static_dir());
    let cors = cors_layer(&state.envy);

    Router::new()
        .route("/generate-image", post(images::controller::generate_image))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(envy: &Envy) -> CorsLayer {
    let origin = match HeaderValue::from_str(envy.allowed_origin()) {
        Ok(origin) => origin,
        Err(e) => {
            tracing::error!(%e, "invalid ALLOWED_ORIGIN, using default");
            HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}
