use serde::{Deserialize, Serialize};

use super::category::CategoryDto;
use super::project::ProjectDto;
use super::tag::TagDto;

/// An article, optionally joined with its category, tags and project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDto {
    #[serde(rename = "columnID", default)]
    pub column_id: String,
    #[serde(rename = "postID")]
    pub post_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "categoryID", default)]
    pub category_id: String,
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "htmlContent", default)]
    pub html_content: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tag: String,
    #[serde(rename = "type", default)]
    pub post_type: u32,
    #[serde(rename = "isTop", default)]
    pub is_top: u32,
    #[serde(rename = "isPasswd", default)]
    pub is_passwd: u32,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub tags: Option<Vec<TagDto>>,
    #[serde(default)]
    pub project: Option<ProjectDto>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub status: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub people: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
    #[serde(default)]
    pub video: String,
}

/// Body for creating an article; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub author: String,
    pub content: String,
    #[serde(rename = "htmlContent")]
    pub html_content: String,
    #[serde(rename = "columnID")]
    pub column_id: String,
    pub tag: String,
    pub ext: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub post_type: u32,
    #[serde(rename = "isTop")]
    pub is_top: u32,
    #[serde(rename = "isPasswd")]
    pub is_passwd: u32,
    pub password: String,
    pub status: u32,
    pub location: String,
    pub people: String,
    pub time: String,
    pub images: Vec<String>,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub video: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListRequest {
    #[serde(rename = "postID")]
    pub post_id: String,
    pub title: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostsRequest {
    #[serde(rename = "postIds")]
    pub post_ids: String,
}

impl DeletePostsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            post_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostListData {
    pub posts: Vec<PostDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    pub post: PostDto,
}
