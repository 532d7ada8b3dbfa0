use contracts::domain::post::{
    CreatePostRequest, DeletePostsRequest, PostData, PostListData, PostListRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

// Articles route under the server's legacy `post` path.
const BASE: &str = "/api/post";

fn post_path(post_id: &str) -> String {
    format!("{}/{}", BASE, post_id)
}

/// Query the article list.
pub async fn get_article_list(
    client: &AdminClient,
    params: &PostListRequest,
) -> Result<PostListData, ApiError> {
    client.get(BASE, params).await
}

/// Create an article.
pub async fn create_article(
    client: &AdminClient,
    req: &CreatePostRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update an article.
pub async fn update_article(
    client: &AdminClient,
    post_id: &str,
    req: &CreatePostRequest,
) -> Result<(), ApiError> {
    client.patch(&post_path(post_id), req).await
}

/// Fetch one article with its joined category, tags and project.
pub async fn get_article_detail(client: &AdminClient, post_id: &str) -> Result<PostData, ApiError> {
    client.get_one(&post_path(post_id)).await
}

/// Batch-delete articles.
pub async fn batch_delete_article(
    client: &AdminClient,
    req: &DeletePostsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

/// Publish an article — a state transition with no body.
pub async fn push_article(client: &AdminClient, post_id: &str) -> Result<(), ApiError> {
    client.put_empty(&post_path(post_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(BASE, "/api/post");
        assert_eq!(post_path("a9"), "/api/post/a9");
    }
}
