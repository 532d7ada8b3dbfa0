use serde::{Deserialize, Serialize};

/// A per-project content configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDto {
    #[serde(default)]
    pub alias: String,
    #[serde(rename = "type", default)]
    pub config_type: u32,
    #[serde(rename = "configID")]
    pub config_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub info: String,
    #[serde(rename = "mdContent", default)]
    pub md_content: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateConfigRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub alias: String,
    #[serde(rename = "type")]
    pub config_type: u32,
    pub title: String,
    pub description: String,
    pub info: String,
    #[serde(rename = "mdContent")]
    pub md_content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConfigRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "mdContent")]
    pub md_content: String,
    pub info: String,
}

// The list filter's project field is capitalized on the wire; the server
// binds `ProjectID` here and `projectID` everywhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigListRequest {
    #[serde(rename = "configID")]
    pub config_id: String,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub config_type: u32,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteConfigsRequest {
    #[serde(rename = "configIds")]
    pub config_ids: String,
}

impl DeleteConfigsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            config_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigListData {
    pub configs: Vec<ConfigDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigData {
    pub config: ConfigDto,
}
