use std::{env, net::SocketAddr};

use imagine_proxy::{app::envy::Envy, router, AppState};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.huggingface_api_key.is_none() {
        tracing::warn!("HUGGINGFACE_API_KEY is not set, inference calls will be rejected");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port()));
    let app = router(AppState::new(envy));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
