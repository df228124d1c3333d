use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::{dtos::get_posts_filter_dto::GetPostsFilterDto, models::post::Post};

pub mod memory;
pub mod postgres;

/// Persistence boundary for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError>;

    /// Inserts a post without an id and updates one that has an id.
    /// Returns the stored post with its id assigned.
    async fn save(&self, post: Post) -> Result<Post, ApiError>;

    async fn save_all(&self, posts: Vec<Post>) -> Result<Vec<Post>, ApiError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;

    async fn delete_all(&self) -> Result<(), ApiError>;

    async fn count(&self) -> Result<i64, ApiError>;

    /// Page of posts ordered by id.
    async fn list(&self, dto: &GetPostsFilterDto) -> Result<Vec<Post>, ApiError>;
}
