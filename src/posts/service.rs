use std::sync::Arc;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    errors::PostsApiError,
    models::{post::Post, post_response::PostResponse},
    repository::PostRepository,
};

/// Post use cases. Input is expected to be validated by the caller.
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn write(&self, dto: &CreatePostDto) -> Result<i64, ApiError> {
        let post = self
            .repository
            .save(Post::new(&dto.title, &dto.content))
            .await?;

        let Some(id) = post.id
        else {
            tracing::error!("repository returned a post without an id");
            return Err(DefaultApiError::InternalServerError.value());
        };

        tracing::debug!(post_id = id, "post written");

        Ok(id)
    }

    pub async fn get_post(&self, id: i64) -> Result<PostResponse, ApiError> {
        let post = self.find_post(id).await?;

        Ok(PostResponse::from(post))
    }

    pub async fn get_post_list(
        &self,
        dto: &GetPostsFilterDto,
    ) -> Result<Vec<PostResponse>, ApiError> {
        let posts = self.repository.list(dto).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn edit(&self, id: i64, dto: &EditPostDto) -> Result<(), ApiError> {
        let mut post = self.find_post(id).await?;
        post.edit(&dto.title, &dto.content);

        self.repository.save(post).await?;

        tracing::debug!(post_id = id, "post edited");

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.find_post(id).await?;
        self.repository.delete_by_id(id).await?;

        tracing::debug!(post_id = id, "post deleted");

        Ok(())
    }

    pub async fn get_posts_count(&self) -> Result<i64, ApiError> {
        self.repository.count().await
    }

    async fn find_post(&self, id: i64) -> Result<Post, ApiError> {
        match self.repository.find_by_id(id).await? {
            Some(post) => Ok(post),
            None => Err(PostsApiError::PostNotFound.value()),
        }
    }
}
