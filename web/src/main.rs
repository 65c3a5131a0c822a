//! Meadowlark Travel HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Console mail, port 3000
//! cargo run --bin meadowlark
//!
//! # Real mail through an SMTP relay
//! SMTP_HOST=smtp.example.com SMTP_USERNAME=user SMTP_PASSWORD=secret cargo run --bin meadowlark
//! ```

use meadowlark_web::{build_router, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,meadowlark=debug,meadowlark_web=debug,meadowlark_mail=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        environment = ?config.environment,
        public_dir = %config.public_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Loaded configuration"
    );

    let address = config.bind_address();
    let state = AppState::from_config(config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Meadowlark started on http://{address}; press Ctrl-C to terminate.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
