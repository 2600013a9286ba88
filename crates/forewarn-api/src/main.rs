use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use forewarn_api::{build_router, AppState};
use forewarn_bedrock::{client, BedrockGenerator};
use forewarn_store::{DiagnosisStore, MemoryStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for the log pipeline
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = client::load_config().await;

    let store: Arc<dyn DiagnosisStore> = match env::var("FOREWARN_BUCKET") {
        Ok(bucket) => {
            tracing::info!(bucket = %bucket, "using S3 diagnosis store");
            Arc::new(S3Store::new(&config, bucket))
        }
        Err(_) => {
            tracing::info!("FOREWARN_BUCKET unset, using in-memory diagnosis store");
            Arc::new(MemoryStore::new())
        }
    };

    let model_id = client::model_id_from_env();
    tracing::info!(model_id = %model_id, "using Bedrock narrative generator");
    let generator = Arc::new(BedrockGenerator::new(&config, model_id));

    let app = build_router(AppState { store, generator });

    let addr = env::var("FOREWARN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "forewarn api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
