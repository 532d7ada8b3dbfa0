use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagDto {
    #[serde(rename = "tagID")]
    pub tag_id: String,
    pub title: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for creating a tag; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagListRequest {
    #[serde(rename = "tagID")]
    pub tag_id: String,
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTagsRequest {
    #[serde(rename = "tagIds")]
    pub tag_ids: String,
}

impl DeleteTagsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            tag_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagListData {
    pub tags: Vec<TagDto>,
    pub total: i64,
}
