//! Notion-style document store client
//!
//! Speaks the store's versioned HTTP block API: paginated child listings
//! via `GET /v1/blocks/{id}/children` and appends via
//! `PATCH /v1/blocks/{id}/children`. Authentication is a bearer token
//! supplied at construction; the store's block payloads are converted to
//! and from the flat `ContentBlock` model at this boundary.

use crate::StoreError;
use async_trait::async_trait;
use scribe_domain::{BlockPage, BlockType, ContentBlock, DocumentStore, RichText};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Default store API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.notion.com";

/// Default store API version header value
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Default timeout for store requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for a Notion-style block store
pub struct NotionStore {
    endpoint: String,
    token: String,
    api_version: String,
    client: reqwest::Client,
}

/// One page of the store's child-listing response
#[derive(Deserialize)]
struct ListChildrenResponse {
    #[serde(default)]
    results: Vec<WireBlock>,
    next_cursor: Option<String>,
}

/// A block as the store serializes it: a type tag plus a payload object
/// keyed by that tag
#[derive(Deserialize)]
struct WireBlock {
    id: String,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(flatten)]
    payloads: HashMap<String, Value>,
}

#[derive(Deserialize, Default)]
struct WirePayload {
    #[serde(default)]
    rich_text: Vec<WireRichText>,
}

#[derive(Deserialize)]
struct WireRichText {
    #[serde(default)]
    plain_text: String,
}

impl WireBlock {
    /// Flatten the store's nested payload into the domain model
    fn into_block(self) -> ContentBlock {
        let payload = self
            .payloads
            .get(&self.block_type)
            .cloned()
            .and_then(|value| serde_json::from_value::<WirePayload>(value).ok())
            .unwrap_or_default();

        ContentBlock {
            id: Some(self.id),
            block_type: BlockType::from(self.block_type),
            rich_text: payload
                .rich_text
                .into_iter()
                .map(|span| RichText::new(span.plain_text))
                .collect(),
        }
    }
}

/// Serialize a block into the store's nested append shape
fn to_wire(block: &ContentBlock) -> Value {
    let tag = block.block_type.as_str();
    let spans: Vec<Value> = block
        .rich_text
        .iter()
        .map(|span| {
            json!({
                "type": "text",
                "text": { "content": span.plain_text }
            })
        })
        .collect();

    json!({
        "object": "block",
        "type": tag,
        tag: { "rich_text": spans }
    })
}

impl NotionStore {
    /// Create a new store client for the default endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Create a new store client against a specific endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            client,
        }
    }

    /// Override the versioned-API header value
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    fn children_url(&self, block_id: &str) -> String {
        format!("{}/v1/blocks/{}/children", self.endpoint, block_id)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(StoreError::Api { status, message })
    }
}

#[async_trait]
impl DocumentStore for NotionStore {
    type Error = StoreError;

    async fn list_children(
        &self,
        block_id: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<BlockPage, Self::Error> {
        let mut request = self
            .client
            .get(self.children_url(block_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
            .query(&[("page_size", page_size.to_string())]);

        if let Some(cursor) = cursor {
            request = request.query(&[("start_cursor", cursor)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let listing: ListChildrenResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        debug!(
            block_id,
            results = listing.results.len(),
            has_more = listing.next_cursor.is_some(),
            "Fetched child listing page"
        );

        Ok(BlockPage {
            results: listing
                .results
                .into_iter()
                .map(WireBlock::into_block)
                .collect(),
            next_cursor: listing.next_cursor,
        })
    }

    async fn append_children(
        &self,
        block_id: &str,
        blocks: &[ContentBlock],
    ) -> Result<(), Self::Error> {
        let body = json!({
            "children": blocks.iter().map(to_wire).collect::<Vec<_>>()
        });

        let response = self
            .client
            .patch(self.children_url(block_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Self::check_status(response).await?;

        debug!(block_id, blocks = blocks.len(), "Appended blocks");
        Ok(())
    }
}
