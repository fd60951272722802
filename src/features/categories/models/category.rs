use sqlx::FromRow;

use crate::shared::validation::is_reserved_title;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub image_url: Option<String>,
}

impl Category {
    /// Sentinel buckets ("Deleted", "No Category") are never user categories
    pub fn is_reserved(&self) -> bool {
        is_reserved_title(&self.title)
    }
}

/// Category row to persist; `id: None` inserts, `Some` overwrites that row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCategory {
    pub id: Option<i32>,
    pub title: String,
    pub image_url: Option<String>,
}
