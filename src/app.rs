use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::{
    classifier::LinearModel,
    config::AppConfig,
    http::{self, rate_limit::ClientRateLimits, AppState},
    infrastructure::shutdown::Shutdown,
    text::StopWords,
};

pub struct SpamGuardApp {
    router: Router,
    port: u16,
    shutdown: Shutdown,
}

impl SpamGuardApp {
    /// Loads the model artifact and builds the router. A model that fails to
    /// load is fatal; the process must not begin serving without it.
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Result<Self> {
        let model = LinearModel::load(Path::new(&config.model.artifact_path)).map_err(|err| {
            tracing::error!(target: "model", error = %err, "error loading model");
            err
        })?;

        let state = Arc::new(AppState {
            classifier: Arc::new(model),
            stopwords: Arc::new(StopWords::english()),
            limits: ClientRateLimits::new(config.rate_limit),
        });

        Ok(Self {
            router: http::router(state),
            port: config.port,
            shutdown,
        })
    }

    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(%addr, "spam detection service listening");

        let mut stop = self.shutdown.subscribe();
        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move { stop.notified().await })
        .await?;

        tracing::info!("spam detection service stopped");
        Ok(())
    }
}
