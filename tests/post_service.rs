mod common;

use axum::http::StatusCode;
use calilog_api::posts::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    repository::PostRepository,
};

use common::test_app;

#[tokio::test]
async fn write_inserts_post() {
    let app = test_app();

    let id = app
        .service
        .write(&CreatePostDto::new("제목", "내용"))
        .await
        .unwrap();

    assert_eq!(app.repository.count().await.unwrap(), 1);

    let post = app.service.get_post(id).await.unwrap();
    assert_eq!(post.id, id);
    assert_eq!(post.title, "제목");
    assert_eq!(post.content, "내용");
}

#[tokio::test]
async fn get_post_returns_stored_fields() {
    let app = test_app();
    let id = app.seed("foo", "bar").await;

    let post = app.service.get_post(id).await.unwrap();

    assert_eq!(post.title, "foo");
    assert_eq!(post.content, "bar");
}

#[tokio::test]
async fn get_post_list_returns_first_page() {
    let app = test_app();
    app.seed_numbered(30).await;

    let posts = app
        .service
        .get_post_list(&GetPostsFilterDto::new(1, 10))
        .await
        .unwrap();

    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].title, "title0");
}

#[tokio::test]
async fn get_post_list_uses_size_as_stride() {
    let app = test_app();
    app.seed_numbered(30).await;

    let posts = app
        .service
        .get_post_list(&GetPostsFilterDto::new(2, 5))
        .await
        .unwrap();

    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0].title, "title5");
    assert_eq!(posts[4].title, "title9");
}

#[tokio::test]
async fn edit_replaces_title_and_content() {
    let app = test_app();
    let id = app.seed("박병호", "홈런왕").await;

    app.service
        .edit(id, &EditPostDto::new("이정후", "타격왕"))
        .await
        .unwrap();

    let post = app.repository.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(post.title, "이정후");
    assert_eq!(post.content, "타격왕");
}

#[tokio::test]
async fn delete_removes_post() {
    let app = test_app();
    let id = app.seed("박병호", "홈런왕").await;

    app.service.delete(id).await.unwrap();

    assert_eq!(app.repository.count().await.unwrap(), 0);

    let api_error = app.service.get_post(id).await.unwrap_err();
    assert_eq!(api_error.code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_missing_post_is_not_found() {
    let app = test_app();
    let id = app.seed("박병호", "홈런왕").await;

    let api_error = app.service.get_post(id + 1).await.unwrap_err();

    assert_eq!(api_error.code, StatusCode::NOT_FOUND);
    assert_eq!(api_error.message, "존재하지 않는 글입니다.");
    assert!(api_error.errors.is_empty());
}

#[tokio::test]
async fn edit_missing_post_is_not_found() {
    let app = test_app();
    let id = app.seed("박병호", "홈런왕").await;

    let api_error = app
        .service
        .edit(id + 1, &EditPostDto::new("이정후", "MVP"))
        .await
        .unwrap_err();

    assert_eq!(api_error.code, StatusCode::NOT_FOUND);

    let untouched = app.service.get_post(id).await.unwrap();
    assert_eq!(untouched.title, "박병호");
}

#[tokio::test]
async fn delete_missing_post_is_not_found() {
    let app = test_app();
    let id = app.seed("박병호", "홈런왕").await;

    let api_error = app.service.delete(id + 1).await.unwrap_err();

    assert_eq!(api_error.code, StatusCode::NOT_FOUND);
    assert_eq!(app.repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn get_posts_count_returns_total() {
    let app = test_app();
    app.seed("박병호", "홈런왕").await;

    assert_eq!(app.service.get_posts_count().await.unwrap(), 1);

    app.seed_numbered(3).await;

    assert_eq!(app.service.get_posts_count().await.unwrap(), 4);
}
