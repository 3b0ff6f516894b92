//! GraphQL over HTTP: request/response envelopes, the transport seam and a
//! thin client that unwraps root fields.

pub mod queries;
pub mod transport;

pub use transport::{GraphQlTransport, HttpTransport};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

/// Body posted to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: Value::Null,
        }
    }

    pub fn with_variables(query: &'static str, variables: Value) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard `{ data, errors }` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Take `root` out of `data`, failing on GraphQL errors or a missing field.
    pub fn into_root<T: DeserializeOwned>(self, root: &str) -> Result<T> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(root, errors = %joined, "GraphQL errors");
            return Err(CoreError::GraphQl(joined));
        }

        let value = self
            .data
            .and_then(|mut data| data.remove(root))
            .ok_or_else(|| CoreError::MissingData(root.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Executes fixed query documents through a [`GraphQlTransport`].
#[derive(Debug, Clone)]
pub struct GraphQlClient<T = HttpTransport> {
    transport: T,
}

impl<T: GraphQlTransport> GraphQlClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run `request` and deserialize the `root` field of `data`.
    pub async fn query<D: DeserializeOwned>(
        &self,
        request: GraphQlRequest,
        root: &str,
    ) -> Result<D> {
        tracing::debug!(root, "GraphQL request");
        let raw = self.transport.execute(request).await?;
        let response: GraphQlResponse = serde_json::from_value(raw)?;
        response.into_root(root)
    }

    /// Like [`Self::query`] but a `null` root is reported as missing data.
    pub async fn query_required<D: DeserializeOwned>(
        &self,
        request: GraphQlRequest,
        root: &str,
    ) -> Result<D> {
        self.query::<Option<D>>(request, root)
            .await?
            .ok_or_else(|| CoreError::MissingData(root.to_string()))
    }
}
