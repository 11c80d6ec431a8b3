//! HTTP client for talking to a running climate-api server in tests.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A reqwest client bound to one server address
pub struct ApiClient {
    addr: SocketAddr,
    client: Client,
}

impl ApiClient {
    pub fn new(addr: SocketAddr) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build test HTTP client");
        Self { addr, client }
    }

    /// Absolute URL for a route on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn Error>> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET a route that must answer 200 and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn Error>> {
        let response = self.get(path).await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("{} answered {}: {}", path, status, body).into());
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = ApiClient::new(([127, 0, 0, 1], 5000).into());
        assert_eq!(
            client.url("/api/v1.0/stations"),
            "http://127.0.0.1:5000/api/v1.0/stations"
        );
    }
}
