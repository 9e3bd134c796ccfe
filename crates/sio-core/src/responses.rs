//! Request and response bodies of the SoundItOut REST backend.
//!
//! Field names follow the backend's wire format, which mixes `camelCase`
//! (controller maps) with `snake_case` (raw embedding rows).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /ai/reports/{reportId}/embed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpsertEmbeddingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
}

/// A single report chunk returned by the similarity search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResult {
    pub id: i64,
    pub student_id: i64,
    pub report_id: i64,
    pub subject: Option<String>,
    pub content: String,
    pub created_at: String,
}

/// Response from `GET /ai/search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub student_id: i64,
    pub query: String,
    pub k: u32,
    pub results: Vec<SearchResult>,
}

/// Response from `POST /admin/ai/reindex`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReindexResponse {
    pub student_id: i64,
    pub reindexed: u64,
}

/// Response from `POST /admin/ai/purge-and-reindex`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurgeReindexResponse {
    pub student_id: i64,
    pub deleted: u64,
    pub reindexed: u64,
}
