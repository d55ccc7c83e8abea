use symptom_core::{rest_addr_from_env_value, CheckerConfig, SymptomChecker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the symptom checker
///
/// Serves the checklist form, the results page and the JSON API on one HTTP listener.
///
/// # Environment Variables
/// - `SYMPTOM_REST_ADDR`: server address (default: "0.0.0.0:5000")
/// - `RUST_LOG`: tracing filter (default directives: `symptom_run=info,api_rest=info,symptom_core=debug,tower_http=debug`)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(default_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = rest_addr_from_env_value(std::env::var("SYMPTOM_REST_ADDR").ok())?;
    let cfg = CheckerConfig::reference()?;

    tracing::info!(
        "++ Loaded {} symptoms and {} illness profiles",
        cfg.catalog().len(),
        cfg.profiles().len()
    );
    tracing::info!("++ Starting symptom checker on {}", addr);

    let app = api_rest::router(SymptomChecker::new(cfg));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Symptom checker stopped");
    Ok(())
}

/// `RUST_LOG` plus directives that surface request spans and scoring summaries.
fn default_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("symptom_run=info".parse()?)
        .add_directive("api_rest=info".parse()?)
        .add_directive("symptom_core=debug".parse()?)
        .add_directive("tower_http=debug".parse()?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_request_and_scoring_logs() {
        let filter = default_filter().unwrap().to_string();
        assert!(filter.contains("tower_http=debug"));
        assert!(filter.contains("symptom_core=debug"));
        assert!(filter.contains("api_rest=info"));
    }
}
