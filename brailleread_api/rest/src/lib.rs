use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use brailleread_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    config: RestServerConfig,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: RestServerCorsConfig,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

/// Origins allowed to call the api from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestServerCorsConfig {
    Any,
    List(Arc<[HeaderValue]>),
}

impl RestServerCorsConfig {
    /// Build the cors config from a list of origins. `"*"` allows any origin.
    pub fn from_origins(origins: &[String]) -> anyhow::Result<Self> {
        if origins.iter().any(|origin| origin == "*") {
            return Ok(Self::Any);
        }

        origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|origins| Self::List(origins.into()))
    }
}

#[derive(Debug)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(config: RestServerConfig, contact: Contact) -> Self {
        Self { config, contact }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let (host, port) = (self.config.host, self.config.port);
        let router = self.router();
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("Failed to start HTTP server")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::status::router())
            .merge(routes::contact::router(Arc::new(self.contact)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(self.config.real_ip_config)(router);
        middlewares::cors::add(&self.config.cors)(router)
    }
}
