//! # HTTP Lookups
//!
//! [`HttpLookup`] answers existence checks by calling `GET {base}/{resource}/{id}`
//! on a dependency service and reading only the status code.

use super::existence::{Existence, ExistenceCheck, ExistenceResult, LookupError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, instrument};

/// Existence checks against a remote service.
///
/// A 2xx status means the record exists and 404 means it does not. Any other
/// status, a transport failure or a timeout is a [`LookupError`]. There is
/// no retry.
#[derive(Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    base_url: String,
    resource: &'static str,
}

impl HttpLookup {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, resource: &'static str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            resource,
        }
    }

    /// Lookups against the identity service (`/users/{id}`).
    pub fn identity(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self::new(client, base_url, "users")
    }

    /// Lookups against the catalog service (`/product/{id}`).
    pub fn catalog(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self::new(client, base_url, "product")
    }

    /// Builds the shared HTTP client with the per-request timeout applied.
    pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder().timeout(timeout).build()
    }

    fn url(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }
}

#[async_trait]
impl ExistenceCheck for HttpLookup {
    #[instrument(skip(self), fields(resource = self.resource))]
    async fn exists(&self, id: u32) -> ExistenceResult {
        let url = self.url(id);
        debug!(%url, "Checking existence");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!(%status, "Lookup response");

        match status {
            s if s.is_success() => Ok(Existence::Found),
            StatusCode::NOT_FOUND => Ok(Existence::Missing),
            s => Err(LookupError::UnexpectedStatus(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode as Status;
    use axum::routing::get;
    use axum::Router;

    /// Serves `/users/{id}`, answering with the id itself as the status code.
    async fn status_echo() -> String {
        let app = Router::new().route(
            "/users/{id}",
            get(|Path(code): Path<u16>| async move {
                Status::from_u16(code).unwrap_or(Status::IM_A_TEAPOT)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_status_interpretation() {
        let base = status_echo().await;
        let client = HttpLookup::client_with_timeout(Duration::from_secs(2)).unwrap();
        let lookup = HttpLookup::identity(client, base);

        assert_eq!(lookup.exists(200).await.unwrap(), Existence::Found);
        assert_eq!(lookup.exists(204).await.unwrap(), Existence::Found);
        assert_eq!(lookup.exists(404).await.unwrap(), Existence::Missing);

        for code in [400, 500, 503] {
            match lookup.exists(code).await {
                Err(LookupError::UnexpectedStatus(status)) => assert_eq!(status.as_u16(), code as u16),
                other => panic!("status {code} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_url_building_strips_trailing_slash() {
        let client = reqwest::Client::new();

        let users = HttpLookup::identity(client.clone(), "http://auth-service:8081/");
        assert_eq!(users.url(3), "http://auth-service:8081/users/3");

        let products = HttpLookup::catalog(client, "http://product-service:8082");
        assert_eq!(products.url(1), "http://product-service:8082/product/1");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_lookup_error() {
        // Bind then drop a listener so the port is known to refuse connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpLookup::client_with_timeout(Duration::from_secs(2)).unwrap();
        let lookup = HttpLookup::identity(client, format!("http://{addr}"));

        assert!(lookup.exists(1).await.is_err());
    }
}
