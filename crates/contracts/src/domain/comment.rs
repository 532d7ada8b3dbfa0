use serde::{Deserialize, Serialize};

/// A comment awaiting moderation. The body text travels as `comment` on
/// the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentDto {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "commentID")]
    pub comment_id: String,
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(default)]
    pub status: u32,
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(rename = "objectID", default)]
    pub object_id: String,
    #[serde(rename = "objectType", default)]
    pub object_type: u32,
    #[serde(rename = "comment", default)]
    pub content: String,
    #[serde(rename = "htmlContent", default)]
    pub html_content: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentListRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(rename = "objectType")]
    pub object_type: u32,
    pub status: u32,
    pub username: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Moderation update: audit status only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub status: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentListData {
    pub comments: Vec<CommentDto>,
    pub total: i64,
}
