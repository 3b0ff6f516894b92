use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::GraphQlRequest;
use crate::error::{CoreError, Result};

/// Moves a GraphQL request to the backend and returns the raw JSON body.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value>;
}

/// HTTP POST transport backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl HttpTransport {
    pub fn new(
        endpoint: Url,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        tracing::info!(endpoint = %endpoint, "creating GraphQL transport");
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value> {
        let mut builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(CoreError::Status {
                status: StatusCode::UNAUTHORIZED.as_u16(),
                body: "unauthorized - check the access token".to_string(),
            }),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(CoreError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
