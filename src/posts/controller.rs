use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::{
        models::api_error::ApiError,
        structs::json_from_request::{JsonFromRequest, PathFromRequest, QueryFromRequest},
    },
    AppState,
};

use super::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    models::post_response::{CreatePostResponse, PostResponse},
};

pub async fn get_posts(
    State(state): State<AppState>,
    QueryFromRequest(dto): QueryFromRequest<GetPostsFilterDto>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    dto.validate()?;

    let posts = state.post_service.get_post_list(&dto).await?;

    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreatePostDto>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    dto.validate()?;
    dto.validate_content()?;

    let post_id = state.post_service.write(&dto).await?;

    Ok(Json(CreatePostResponse { post_id }))
}

pub async fn get_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.post_service.get_post(id).await?;

    Ok(Json(post))
}

pub async fn edit_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
    JsonFromRequest(dto): JsonFromRequest<EditPostDto>,
) -> Result<(), ApiError> {
    dto.validate()?;

    state.post_service.edit(id, &dto).await
}

pub async fn delete_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<(), ApiError> {
    state.post_service.delete(id).await
}
