use serde::{Deserialize, Serialize};

/// A media library entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDto {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "fileType", default)]
    pub file_type: u32,
    // Wire name is snake_case, unlike the rest of the resource payload.
    #[serde(rename = "file_extension", default)]
    pub file_extension: String,
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for updating a resource's descriptive fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResourceRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceListRequest {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    #[serde(rename = "type")]
    pub file_type: u32,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Deletion takes a comma-joined id string under a single key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteResourcesRequest {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
}

impl DeleteResourcesRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            resource_id: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceListData {
    pub resources: Vec<ResourceDto>,
    pub total: i64,
}

/// CDN upload result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResourceDto {
    #[serde(rename = "fileExt", default)]
    pub file_ext: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "fileType", default)]
    pub file_type: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadData {
    pub upload: UploadResourceDto,
}
