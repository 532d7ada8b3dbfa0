use serde::{Deserialize, Serialize};

/// 推广场景 — a placement slot ads are grouped under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSceneDto {
    #[serde(rename = "adSceneID")]
    pub ad_scene_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(rename = "projectTitle", default)]
    pub project_title: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// 推广内容 — an ad inside a scene. `SceneTitle` keeps its historical
/// capitalized wire name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdDto {
    #[serde(rename = "adID")]
    pub ad_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "sceneID", default)]
    pub scene_id: String,
    #[serde(rename = "SceneTitle", default)]
    pub scene_title: String,
    #[serde(default)]
    pub status: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub sort: u32,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "urlType", default)]
    pub url_type: u32,
    #[serde(default)]
    pub ext: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAdSceneRequest {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdSceneRequest {
    pub title: String,
    pub description: String,
}

// Same capitalization quirk as the config list filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSceneListRequest {
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAdScenesRequest {
    #[serde(rename = "adScenesIds")]
    pub ad_scene_ids: String,
}

impl DeleteAdScenesRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ad_scene_ids: ids.join(","),
        }
    }
}

/// Body for creating an ad; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "urlType")]
    pub url_type: u32,
    pub image: String,
    pub sort: u32,
    pub status: u32,
    #[serde(rename = "sceneID")]
    pub scene_id: String,
    pub ext: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdListRequest {
    #[serde(rename = "sceneID")]
    pub scene_id: String,
    pub title: String,
    pub status: u32,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAdsRequest {
    #[serde(rename = "adsIds")]
    pub ad_ids: String,
}

impl DeleteAdsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ad_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdSceneListData {
    #[serde(rename = "adScenes")]
    pub ad_scenes: Vec<AdSceneDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdListData {
    pub ads: Vec<AdDto>,
    pub total: i64,
}
