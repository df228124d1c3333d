use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    // assigned by the repository on first save
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Replaces both fields. There is no partial edit.
    pub fn edit(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
    }
}
