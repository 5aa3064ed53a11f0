use osiedle_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    osiedle_observability::init();

    let config = AppConfig::from_env();
    let app = osiedle_api::app::build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(variant = %config.variant, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
