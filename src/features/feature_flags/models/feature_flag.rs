use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for a named boolean feature
#[derive(Debug, Clone, FromRow)]
pub struct FeatureFlag {
    pub name: String,
    pub enabled: bool,
    pub strategy: Option<String>,
    pub params: Json<HashMap<String, String>>,
    pub updated_at: DateTime<Utc>,
}
