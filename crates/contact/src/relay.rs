//! Transport to the third-party form relay.
//!
//! The relay answers with a JSON object carrying at least a `message` field.
//! A `200` status means the message was accepted; any other status is a
//! rejection. A body that is not such an object is treated like a transport
//! failure, whatever the status.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::submission::ContactPayload;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("relay answered {status} with a malformed body: {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<RelayReply, RelayError>;
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    message: Option<String>,
}

/// Relay backed by the Web3Forms submit API.
#[derive(Clone, Debug)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl Web3FormsRelay {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.web3forms.com/submit";

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for Web3FormsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<RelayReply, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(RelayError::Transport)?;

        let body: ReplyBody = serde_json::from_slice(&bytes)
            .map_err(|source| RelayError::MalformedBody { status, source })?;

        Ok(RelayReply {
            status,
            message: body.message,
        })
    }
}
