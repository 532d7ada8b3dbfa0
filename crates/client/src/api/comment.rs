use contracts::domain::comment::{CommentListData, CommentListRequest, UpdateCommentRequest};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/comment";

fn comment_path(comment_id: &str) -> String {
    format!("{}/{}", BASE, comment_id)
}

/// Query the moderation queue.
pub async fn get_comment_list(
    client: &AdminClient,
    params: &CommentListRequest,
) -> Result<CommentListData, ApiError> {
    client.get(BASE, params).await
}

/// Update a comment's audit status.
pub async fn update_comment(
    client: &AdminClient,
    comment_id: &str,
    req: &UpdateCommentRequest,
) -> Result<(), ApiError> {
    client.patch(&comment_path(comment_id), req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(comment_path("c5"), "/api/comment/c5");
    }
}
