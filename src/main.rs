//! Service binary: assemble config, wire the Stripe processor, serve

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use basket_checkout::config::CheckoutConfig;
use basket_checkout::payment::stripe::StripeProcessor;
use basket_checkout::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("basket_checkout=info,tower_http=info")),
        )
        .init();

    // The secret is read here, at the edge, and injected into the state;
    // handlers only ever see the config value.
    let config = CheckoutConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let processor = StripeProcessor::new(&config);
    let app = build_router(AppState::new(config, processor));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("checkout service listening on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
