// Copyright 2024 David Kalliecharan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Copyright (c) 2024 David Kalliecharan
//
// SPDX-License-Identifier: BSD-2-Clause

//! src/startup.rs

use crate::error::StartupError;
use crate::routes::health_check;
use crate::settings::AppSettings;
use axum::{extract::DefaultBodyLimit, http::Request, routing::get, Router};
use clap::Parser;
use std::{future::Future, net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Level;

/// Largest request body any extractor will accept.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

#[derive(Parser, Debug)]
#[command(version, about = "Deployment pipeline health check server")]
pub struct Cli {
    /// ip address, overrides the settings file
    #[arg(short, long)]
    pub addr: Option<String>,
    /// ip port, overrides the settings file
    #[arg(short, long)]
    pub port: Option<u16>,
    /// settings file, defaults to `./settings.<APP_ENV>.toml`
    #[arg(short, long)]
    pub settings: Option<PathBuf>,
}

impl Cli {
    /// Command line values take precedence over the settings file.
    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(addr) = &self.addr {
            settings.addr = addr.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        settings
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = uuid::Uuid::new_v4().to_string();

                tracing::span!(
                    Level::DEBUG,
                    "request",
                    %request_id,
                    method = ?request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
}

/// Application
///
/// The router bound to a listener. Binding happens in `build` so the
/// real port is known before serving, which matters when port is 0.
pub struct Application {
    addr: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(settings: AppSettings) -> Result<Self, StartupError> {
        let listener = TcpListener::bind(settings.bind_address()).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "listening");

        Ok(Self {
            addr,
            listener,
            router: app(),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Serves until ctrl-c or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    pub async fn run_until<F>(self, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
