use std::sync::Arc;

use honeypot::api::honeypot_routes;
use honeypot::config::HoneypotConfig;
use honeypot::error::Error;
use honeypot::honeypot::Honeypot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Refuse to start without a secret
    let config = match HoneypotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  export {}=...", honeypot::config::API_KEY_VAR);
            return Err(Error::from(e).into());
        }
    };

    eprintln!("🍯 Honeypot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listening: http://{}", config.bind_addr);
    eprintln!("   Message API: http://{}/message\n", config.bind_addr);

    let app = honeypot_routes(Arc::new(Honeypot::new(&config)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(Error::from)?;
    tracing::info!(addr = %config.bind_addr, "Honeypot server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
