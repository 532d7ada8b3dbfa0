use serde::{Deserialize, Serialize};

/// A member point-balance movement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub point: f32,
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePointLogRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub point: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointLogListRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub nickname: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointListData {
    pub points: Vec<PointDto>,
    pub total: i64,
}
