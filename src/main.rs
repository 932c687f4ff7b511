use interview_prep_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::cors::cors_layer,
    routes,
    services::gemini_client::GeminiClient,
    AppState,
};
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    init_config()?;
    let config = get_config();

    if config.gemini_key_missing() {
        tracing::warn!("GEMINI_API_KEY is not set; question generation will fail until it is configured");
    }

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let http_client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;
    let gemini = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        http_client,
    )
    .with_base_url(config.gemini_base_url.clone());
    info!("Using Gemini model {}", gemini.model());

    let app_state = AppState::new(pool, Arc::new(gemini));

    let app = routes::router()
        .with_state(app_state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
