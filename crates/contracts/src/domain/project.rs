use serde::{Deserialize, Serialize};

/// A project (site) managed by the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDto {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    pub name: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "postUrl", default)]
    pub post_url: String,
    #[serde(default)]
    pub icp: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "baiduAnalytics", default)]
    pub baidu_analytics: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(rename = "publicSecurity", default)]
    pub public_security: String,
    #[serde(rename = "navImage", default)]
    pub nav_image: String,
    #[serde(default)]
    pub info: String,
    #[serde(rename = "pushToken", default)]
    pub push_token: String,
}

/// Body for creating a project; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub domain: String,
    #[serde(rename = "postUrl")]
    pub post_url: String,
    pub icp: String,
    #[serde(rename = "baiduAnalytics")]
    pub baidu_analytics: String,
    pub favicon: String,
    #[serde(rename = "publicSecurity")]
    pub public_security: String,
    pub author: String,
    #[serde(rename = "navImage")]
    pub nav_image: String,
    pub info: String,
    #[serde(rename = "pushToken")]
    pub push_token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectListRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProjectsRequest {
    #[serde(rename = "projectIds")]
    pub project_ids: String,
}

impl DeleteProjectsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            project_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListData {
    pub projects: Vec<ProjectDto>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_request_joins_ids() {
        let req = DeleteProjectsRequest::new(&["p1", "p2", "p3"]);
        assert_eq!(req.project_ids, "p1,p2,p3");
    }

    #[test]
    fn test_list_payload_decodes() {
        let json = r#"{"projects":[{"projectID":"x1","title":"站点","description":"d","name":"main","createdAt":"2024-01-01 00:00:00"}],"total":1}"#;
        let data: ProjectListData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total, 1);
        assert_eq!(data.projects[0].project_id, "x1");
    }
}
