// --- Generador de Horarios - Archivo principal ---

use timetabler::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("=== Generador de Horarios (API) === http://{}", cfg.bind);
    run_server(cfg).await?;
    Ok(())
}
