use std::sync::Arc;

use brailleread_api_rest::{RestServerConfig, RestServerCorsConfig, RestServerRealIpConfig};
use brailleread_config::Config;
use brailleread_core_contact_impl::ContactFeatureConfig;
use brailleread_extern_impl::{contact::ContactApiServiceConfig, http::HttpClient};
use types::{ContactApi, ContactFeature, ContactFormFeature, Email, RestServer, Template, Time};
use url::Url;

pub mod types;

/// Service configurations derived from the loaded [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    // API
    rest_server_config: RestServerConfig,

    // Core
    contact_feature_config: ContactFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            cors: RestServerCorsConfig::from_origins(&config.http.allowed_origins)?,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config
                .contact
                .recipient
                .clone()
                .unwrap_or_else(|| config.email.from.clone().into())
                .into(),
            send_timeout: config.email.timeout.into(),
        };

        Ok(Self {
            rest_server_config,
            contact_feature_config,
        })
    }
}

/// Wires the services of the relay server
#[derive(Debug)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self { config, email }
    }

    pub fn rest_server(self) -> anyhow::Result<RestServer> {
        let contact = ContactFeature::new(
            Time::default(),
            Template::new()?,
            self.email,
            self.config.contact_feature_config,
        );

        Ok(RestServer::new(self.config.rest_server_config, contact))
    }
}

/// Build the client side contact form flow for the server at `base_url`
pub fn contact_form_feature(base_url: &Url) -> anyhow::Result<ContactFormFeature> {
    let contact_api = ContactApi::new(ContactApiServiceConfig::new(base_url)?, HttpClient::new()?);
    Ok(ContactFormFeature::new(contact_api))
}
