use serde::Serialize;

/// Identity resolved from a search query
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub user_id: String,
}
