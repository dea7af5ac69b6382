//! Primex Business Site
//!
//! A Leptos SSR marketing website.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), primex_marketing::config::ServerError> {
    use leptos::get_configuration;
    use primex_marketing::config::{ServerConfig, ServerError};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None)
        .await
        .map_err(|e| ServerError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = primex_marketing::server::router(conf.leptos_options, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(assets = %config.assets_dir.display(), "Primex site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser entry point is `primex_marketing::hydrate`.
}
