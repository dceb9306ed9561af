use std::sync::Arc;

use gita_prerna::services::sessions::SessionRegistry;
use gita_prerna::services::store::ContentStore;
use gita_prerna::{AppState, app};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Build the content store from the embedded table
    let store = Arc::new(ContentStore::new()?);
    tracing::info!(
        chapters = store.chapters().len(),
        authored_verses = store.total_authored_verses(),
        "content store ready"
    );

    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()); // In production, make this required
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = AppState {
        store,
        sessions: Arc::new(SessionRegistry::new()),
        admin_password: admin_password.into(),
    };

    // Run our application
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
