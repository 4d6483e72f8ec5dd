//! Stub test server: the accident-alert HTTP surface with canned responses.

use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &accident_alert::config::CONFIG;
    accident_alert::logging::init(&cfg.loglevel);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("stub server listening on {}", cfg.listen_addr);
    axum::serve(listener, accident_alert::stub_router()).await?;
    Ok(())
}
