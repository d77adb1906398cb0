use crate::api::ApiClient;
use crate::auth::SessionStore;
use crate::config::Config;
use crate::router::{handle, App};
use astra::Server;
use std::sync::Arc;

mod api;
mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Listings API client
    let api = match ApiClient::new(config.api_base_url.clone(), config.api_timeout) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "failed to build API client");
            std::process::exit(1);
        }
    };
    tracing::info!(api_base_url = %api.base_url(), "listings API configured");

    let app = App {
        api: Arc::new(api),
        sessions: SessionStore::new(config.sessions.clone()),
        api_base_url: config.api_base_url.clone(),
    };

    // 3️⃣ Start the server
    tracing::info!(addr = %config.addr, workers = config.max_workers, "listening");
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                responses::error_to_response(err)
            }
        };
        tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
