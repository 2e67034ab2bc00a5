//! Archived law text database models

use serde_json::Value;
use sqlx::FromRow;

/// Database model for the `law_text_snapshot` table
#[derive(Debug, Clone, FromRow)]
pub struct SnapshotModel {
    pub mst: String,
    pub side: String,
    pub basic: Option<Value>,
}

/// Database model for the `law_article` table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub ordinal: i32,
    pub article_no: Option<String>,
    pub content: Option<String>,
}
