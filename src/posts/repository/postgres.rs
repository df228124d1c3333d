use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    app::{models::api_error::ApiError, util::sqlx::internal_error},
    posts::{
        dtos::get_posts_filter_dto::GetPostsFilterDto, errors::PostsApiError, models::post::Post,
    },
};

use super::PostRepository;

pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn upsert<'e, E>(executor: E, post: &Post) -> Result<Option<Post>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    match post.id {
        Some(id) => {
            sqlx::query_as::<_, Post>(
                "
                UPDATE posts SET title = $1, content = $2
                WHERE id = $3
                RETURNING id, title, content
                ",
            )
            .bind(&post.title)
            .bind(&post.content)
            .bind(id)
            .fetch_optional(executor)
            .await
        }
        None => {
            sqlx::query_as::<_, Post>(
                "
                INSERT INTO posts (title, content)
                VALUES ($1, $2)
                RETURNING id, title, content
                ",
            )
            .bind(&post.title)
            .bind(&post.content)
            .fetch_optional(executor)
            .await
        }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Post>(
            "
            SELECT id, title, content FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match sqlx_result {
            Ok(post) => Ok(post),
            Err(e) => Err(internal_error(e)),
        }
    }

    async fn save(&self, post: Post) -> Result<Post, ApiError> {
        match upsert(&self.pool, &post).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(PostsApiError::PostNotFound.value()),
            Err(e) => Err(internal_error(e)),
        }
    }

    async fn save_all(&self, posts: Vec<Post>) -> Result<Vec<Post>, ApiError> {
        let mut tx = self.pool.begin().await.map_err(internal_error)?;
        let mut saved = Vec::with_capacity(posts.len());

        for post in posts {
            match upsert(&mut tx, &post).await {
                Ok(Some(post)) => saved.push(post),
                // dropping tx rolls back
                Ok(None) => return Err(PostsApiError::PostNotFound.value()),
                Err(e) => return Err(internal_error(e)),
            }
        }

        tx.commit().await.map_err(internal_error)?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        let sqlx_result = sqlx::query(
            "
            DELETE FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await;

        match sqlx_result {
            Ok(_) => Ok(()),
            Err(e) => Err(internal_error(e)),
        }
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        match sqlx::query("DELETE FROM posts").execute(&self.pool).await {
            Ok(result) => {
                tracing::debug!(rows = result.rows_affected(), "deleted all posts");
                Ok(())
            }
            Err(e) => Err(internal_error(e)),
        }
    }

    async fn count(&self) -> Result<i64, ApiError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(internal_error)
    }

    async fn list(&self, dto: &GetPostsFilterDto) -> Result<Vec<Post>, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Post>(
            "
            SELECT id, title, content FROM posts
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(dto.limit())
        .bind(dto.offset())
        .fetch_all(&self.pool)
        .await;

        match sqlx_result {
            Ok(posts) => Ok(posts),
            Err(e) => Err(internal_error(e)),
        }
    }
}
