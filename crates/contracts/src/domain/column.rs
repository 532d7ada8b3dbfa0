use serde::{Deserialize, Serialize};

/// 专栏 — a curated article column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnDto {
    #[serde(rename = "columnID")]
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub info: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateColumnRequest {
    pub title: String,
    pub description: String,
    pub info: String,
    pub icon: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateColumnRequest {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub info: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnListRequest {
    #[serde(rename = "columnID")]
    pub column_id: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteColumnsRequest {
    #[serde(rename = "columnIds")]
    pub column_ids: String,
}

impl DeleteColumnsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            column_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnListData {
    pub columns: Vec<ColumnDto>,
    pub total: i64,
}
