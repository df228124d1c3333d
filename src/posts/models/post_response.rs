use serde::Serialize;

use super::post::Post;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            // posts read back from a repository always carry an id
            id: post.id.unwrap_or_default(),
            title: post.title,
            content: post.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub post_id: i64,
}
