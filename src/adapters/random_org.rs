use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const RANDOM_ORG_URL: &str = "https://api.random.org/json-rpc/4/invoke";

/// JSON-RPC client for the random.org `generateIntegers` method. Each
/// `permutation` call is one POST; responses are never cached.
pub struct RandomOrgClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RandomOrgClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: GenerateIntegersParams<'a>,
    id: u32,
}

#[derive(Serialize)]
struct GenerateIntegersParams<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    n: usize,
    min: usize,
    max: usize,
    replacement: bool,
    base: u8,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<RpcResult>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcResult {
    random: RandomData,
}

#[derive(Deserialize)]
struct RandomData {
    data: Vec<usize>,
}

#[derive(Deserialize)]
struct RpcError {
    message: String,
}

#[async_trait]
impl RandomSource for RandomOrgClient {
    async fn permutation(&self, n: usize) -> Result<Vec<usize>> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "generateIntegers",
            params: GenerateIntegersParams {
                api_key: &self.api_key,
                n,
                min: 0,
                max: n.saturating_sub(1),
                replacement: false,
                base: 10,
            },
            id: 1,
        };

        tracing::debug!("Requesting {} unique integers from {}", n, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let envelope: RpcResponse = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(SantaError::RandomOrgError {
                message: error.message,
            });
        }

        let data = envelope
            .result
            .map(|r| r.random.data)
            .ok_or_else(|| SantaError::RandomOrgError {
                message: "response contained neither result nor error".to_string(),
            })?;

        if data.len() != n {
            return Err(SantaError::RandomOrgError {
                message: format!("expected {} integers, got {}", n, data.len()),
            });
        }

        tracing::debug!("Received sequence: {:?}", data);
        Ok(data)
    }
}
