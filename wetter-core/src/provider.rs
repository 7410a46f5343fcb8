use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::{fmt::Debug, time::Duration};
use tracing::debug;

use crate::{Config, error::TransportError, provider::openweather::OpenWeatherClient};

pub mod openweather;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and raw body of an upstream response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// HTTP GET collaborator used by [`OpenWeatherClient`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build().map_err(TransportError::Build)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(url, e))?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| TransportError::from_reqwest(url, e))?;
        debug!(%status, bytes = body.len(), "received upstream response");

        Ok(HttpResponse { status, body: body.to_vec() })
    }
}

/// Construct a ready client from config and the value of the API key
/// environment variable, if any.
pub fn client_from_config(
    config: &Config,
    env_api_key: Option<String>,
) -> anyhow::Result<OpenWeatherClient> {
    let api_key = config.resolve_api_key(env_api_key)?;
    let transport = ReqwestTransport::new(config.timeout())?;

    Ok(OpenWeatherClient::new(api_key, Box::new(transport))
        .with_base_url(config.base_url())
        .with_timezone(config.timezone()?))
}
