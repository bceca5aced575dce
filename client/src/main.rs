//! AgroSmart probe
//!
//! Checks that the prediction service configured for this environment is
//! reachable and reports its prediction counters.

use agrosmart_client::{AgroClient, ApiConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agrosmart_client=debug,agrosmart_probe=info,reqwest=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ApiConfig::load()?;
    let client = AgroClient::new(config)?;

    tracing::info!("Probing prediction service at {}", client.base_url());

    match client.health_check().await {
        Ok(health) => {
            tracing::info!(
                status = %health.status,
                version = health.version.as_deref().unwrap_or("unknown"),
                "{}",
                health.message
            );
        }
        Err(e) => {
            tracing::error!(status = ?e.status(), "Prediction service unavailable: {}", e);
            anyhow::bail!("prediction service at {} is unavailable", client.base_url());
        }
    }

    let stats = client.get_statistics().await?;
    tracing::info!(
        total = stats.total_predictions,
        crops = stats.crops,
        fertilizers = stats.fertilizers,
        yields = stats.yields,
        "Prediction statistics"
    );

    Ok(())
}
