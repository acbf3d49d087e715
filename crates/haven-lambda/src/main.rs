use tracing_subscriber::EnvFilter;

use haven_lambda::config::ApiConfig;
use haven_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let app = haven_lambda::router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
