use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    app::models::api_error::ApiError,
    posts::{
        dtos::get_posts_filter_dto::GetPostsFilterDto, errors::PostsApiError, models::post::Post,
    },
};

use super::PostRepository;

/// Process-local post store. Ids start at 1 and are never reused.
///
/// Data is lost on restart.
pub struct MemoryPostRepository {
    posts: RwLock<BTreeMap<i64, Post>>,
    sequence: AtomicI64,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    fn store(&self, posts: &mut BTreeMap<i64, Post>, mut post: Post) -> Result<Post, ApiError> {
        match post.id {
            Some(id) => match posts.get_mut(&id) {
                Some(stored) => {
                    *stored = post.clone();
                    Ok(post)
                }
                None => Err(PostsApiError::PostNotFound.value()),
            },
            None => {
                let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                post.id = Some(id);
                posts.insert(id, post.clone());
                Ok(post)
            }
        }
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        self.store(&mut posts, post)
    }

    async fn save_all(&self, posts: Vec<Post>) -> Result<Vec<Post>, ApiError> {
        let mut stored = self.posts.write().await;

        // stage on a copy so a failure leaves the store untouched
        let mut staged = stored.clone();
        let mut saved = Vec::with_capacity(posts.len());
        for post in posts {
            saved.push(self.store(&mut staged, post)?);
        }

        *stored = staged;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.posts.write().await.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        self.posts.write().await.clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64, ApiError> {
        Ok(self.posts.read().await.len() as i64)
    }

    async fn list(&self, dto: &GetPostsFilterDto) -> Result<Vec<Post>, ApiError> {
        let posts = self.posts.read().await;

        Ok(posts
            .values()
            .skip(dto.offset() as usize)
            .take(dto.limit() as usize)
            .cloned()
            .collect())
    }
}
