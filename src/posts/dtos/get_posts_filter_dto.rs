use serde::Deserialize;
use validator::Validate;

/// Offset pagination over posts, `page` is 1-based.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct GetPostsFilterDto {
    #[validate(range(min = 1, message = "page must be 1 or greater."))]
    pub page: i64,
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100."))]
    pub size: i64,
}

impl Default for GetPostsFilterDto {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

impl GetPostsFilterDto {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    pub fn limit(&self) -> i64 {
        self.size.max(0)
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }
}
