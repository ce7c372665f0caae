//! Core data types shared by the client and CLI.
//!
//! These mirror the JSON shapes exchanged with the Mentanova backend.
//! Timestamps arrive as naive ISO-8601 strings (the backend stores UTC
//! without an offset) and are kept as [`NaiveDateTime`].

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stored credentials.
///
/// A present access token is not proof of validity; only a successful
/// authenticated call confirms it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
    #[serde(default)]
    pub preferences: serde_json::Value,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

fn default_role() -> String {
    "user".to_string()
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: User,
}

impl TokenResponse {
    pub fn session(&self) -> Session {
        Session {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Response of `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    /// Present only when the backend rotates refresh tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============ Documents ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListItem {
    pub id: String,
    pub filename: String,
    pub doc_type: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_chunks: i64,
    pub status: String,
    pub upload_date: NaiveDateTime,
    #[serde(default)]
    pub processed_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    pub total: i64,
    pub documents: Vec<DocumentListItem>,
}

/// Filters and paging for `GET /documents`.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub doc_type: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
}

impl DocumentFilter {
    /// Query pairs with unset fields omitted.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        for (key, value) in [
            ("doc_type", &self.doc_type),
            ("status", &self.status),
            ("department", &self.department),
        ] {
            if let Some(v) = value {
                pairs.push((key.to_string(), v.clone()));
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    pub status: String,
    pub message: String,
    pub file_size_mb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub document_id: String,
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub total_chunks: Option<i64>,
    #[serde(default)]
    pub upload_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub processed_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    pub original_filename: String,
    pub file_size_mb: f64,
    pub doc_type: String,
    #[serde(default)]
    pub department: Option<String>,
    pub total_pages: i64,
    pub total_chunks: i64,
    #[serde(default)]
    pub has_tables: bool,
    #[serde(default)]
    pub has_images: bool,
    pub status: String,
    pub upload_date: NaiveDateTime,
    #[serde(default)]
    pub processed_date: Option<NaiveDateTime>,
    pub mime_type: String,
    pub preview_type: String,
    pub is_previewable: bool,
}

/// Plain-text preview of a text-based document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPreview {
    pub content: String,
    pub is_truncated: bool,
    pub total_size: i64,
    pub preview_size: i64,
}

/// Extensions the backend's upload validator accepts.
pub const DOCUMENT_EXTENSIONS: [&str; 6] = ["pdf", "docx", "doc", "txt", "xlsx", "xls"];

// ============ Chunk editor ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub chunk_index: i64,
    pub content: String,
    pub chunk_type: String,
    #[serde(default)]
    pub page_numbers: Vec<i64>,
    #[serde(default)]
    pub section_title: Option<String>,
    #[serde(default)]
    pub token_count: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_edited: bool,
    #[serde(default)]
    pub edited_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub edited_by: Option<String>,
    #[serde(default)]
    pub edit_count: i64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Inclusive bounds on edited chunk content length, in characters.
pub const CHUNK_CONTENT_MIN: usize = 10;
pub const CHUNK_CONTENT_MAX: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkEdit {
    pub chunk_id: String,
    pub new_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditHistoryEntry {
    pub id: String,
    pub edited_at: NaiveDateTime,
    pub edited_by: String,
    pub old_content: String,
    pub new_content: String,
    #[serde(default)]
    pub change_summary: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditStats {
    pub total_chunks: i64,
    pub edited_chunks: i64,
    pub unedited_chunks: i64,
    pub total_edits: i64,
    pub edit_percentage: f64,
}

/// Most edits accepted by one `POST /chunks/batch-edit`.
pub const BATCH_EDIT_MAX: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEditRequest {
    pub edits: Vec<ChunkEdit>,
}

/// Per-batch outcome. Individual failures do not fail the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEditResult {
    pub total: i64,
    pub successful: i64,
    pub failed: i64,
    #[serde(default)]
    pub errors: Vec<BatchEditError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEditError {
    pub chunk_id: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Longest title accepted by `PUT /chunks/{id}/title`.
pub const CHUNK_TITLE_MAX: usize = 200;

/// Response of the single-chunk title endpoints (generate and set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkTitle {
    pub chunk_id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleGenerationSummary {
    pub document_id: String,
    pub total_chunks: i64,
    pub success: i64,
    pub failed: i64,
    #[serde(default)]
    pub message: String,
}

// ============ Search ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkResult {
    pub chunk_id: String,
    pub document_id: String,
    pub content: String,
    pub chunk_type: String,
    #[serde(default)]
    pub page_numbers: Vec<i64>,
    #[serde(default)]
    pub section_title: Option<String>,
    pub relevance_score: f64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: i64,
    pub chunks: Vec<ChunkResult>,
    pub retrieval_strategy: String,
    pub intent: String,
    pub complexity: String,
    pub total_context_tokens: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub document: String,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub section: Option<String>,
    pub chunk_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextResponse {
    pub query: String,
    pub context_text: String,
    pub total_tokens: i64,
    pub chunks_used: i64,
    pub sources: Vec<SourceInfo>,
    #[serde(default)]
    pub retrieval_metadata: serde_json::Value,
}

/// Parameters shared by `POST /search` and `POST /search/context`.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub top_k: u32,
    pub doc_type: Option<String>,
    pub department: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: 5,
            doc_type: None,
            department: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("query".to_string(), self.query.clone()),
            ("top_k".to_string(), self.top_k.to_string()),
        ];
        if let Some(t) = &self.doc_type {
            pairs.push(("doc_type".to_string(), t.clone()));
        }
        if let Some(d) = &self.department {
            pairs.push(("department".to_string(), d.clone()));
        }
        pairs
    }
}

// ============ Health ============

/// `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `GET /health/detailed`: overall status plus one entry per dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealth {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub checks: BTreeMap<String, HealthCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// `GET /health/ready` and `GET /health/live`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceState {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_without_refresh() {
        let json = serde_json::json!({
            "access_token": "a.b.c",
            "token_type": "bearer",
            "expires_in": 1800,
            "user": {
                "id": "u1", "email": "ana@example.com", "username": "ana",
                "role": "admin", "is_active": true, "is_verified": false,
                "created_at": "2025-03-04T10:11:12.123456", "last_login": null
            }
        });
        let tokens: TokenResponse = serde_json::from_value(json).unwrap();
        let session = tokens.session();
        assert_eq!(session.access_token, "a.b.c");
        assert_eq!(session.refresh_token, None);
        assert!(tokens.user.is_admin());
        assert!(tokens.user.created_at.is_some());
    }

    #[test]
    fn test_document_filter_omits_unset() {
        let filter = DocumentFilter {
            limit: Some(10),
            status: Some("completed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("status".to_string(), "completed".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_query_defaults() {
        let q = SearchQuery::new("leave policy");
        let pairs = q.query_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], ("top_k".to_string(), "5".to_string()));
    }

    #[test]
    fn test_detailed_health_checks() {
        let json = serde_json::json!({
            "status": "unhealthy",
            "timestamp": "2025-03-04T10:11:12.123456",
            "checks": {
                "database": { "status": "unhealthy", "message": "Database connection failed" },
                "pgvector": { "status": "healthy", "message": "pgvector extension available" }
            }
        });
        let health: DetailedHealth = serde_json::from_value(json).unwrap();
        let names: Vec<&str> = health.checks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["database", "pgvector"]);
        assert_eq!(health.checks["database"].status, "unhealthy");
    }

    #[test]
    fn test_batch_result_without_errors() {
        let json = serde_json::json!({ "total": 2, "successful": 2, "failed": 0 });
        let result: BatchEditResult = serde_json::from_value(json).unwrap();
        assert!(result.errors.is_empty());
    }
}
