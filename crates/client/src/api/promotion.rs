//! Promotion management: scenes (placement slots) and the ads inside
//! them share this module, as they share the `/api/ad` routing prefix.

use contracts::domain::ad::{
    AdListData, AdListRequest, AdSceneListData, AdSceneListRequest, CreateAdRequest,
    CreateAdSceneRequest, DeleteAdScenesRequest, DeleteAdsRequest, UpdateAdSceneRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const AD_BASE: &str = "/api/ad";
const SCENE_BASE: &str = "/api/ad/scene";

fn scene_path(ad_scene_id: &str) -> String {
    format!("{}/{}", SCENE_BASE, ad_scene_id)
}

fn ad_path(ad_id: &str) -> String {
    format!("{}/{}", AD_BASE, ad_id)
}

/// Query the promotion scene list.
pub async fn get_scene_list(
    client: &AdminClient,
    params: &AdSceneListRequest,
) -> Result<AdSceneListData, ApiError> {
    client.get(SCENE_BASE, params).await
}

/// Create a promotion scene.
pub async fn create_scene(
    client: &AdminClient,
    req: &CreateAdSceneRequest,
) -> Result<(), ApiError> {
    client.post(SCENE_BASE, req).await
}

/// Update a promotion scene.
pub async fn update_scene(
    client: &AdminClient,
    ad_scene_id: &str,
    req: &UpdateAdSceneRequest,
) -> Result<(), ApiError> {
    client.patch(&scene_path(ad_scene_id), req).await
}

/// Batch-delete promotion scenes.
pub async fn batch_delete_scene(
    client: &AdminClient,
    req: &DeleteAdScenesRequest,
) -> Result<(), ApiError> {
    client.delete(SCENE_BASE, req).await
}

/// Query the ad list.
pub async fn get_ad_list(
    client: &AdminClient,
    params: &AdListRequest,
) -> Result<AdListData, ApiError> {
    client.get(AD_BASE, params).await
}

/// Create an ad.
pub async fn create_ad(client: &AdminClient, req: &CreateAdRequest) -> Result<(), ApiError> {
    client.post(AD_BASE, req).await
}

/// Update an ad.
pub async fn update_ad(
    client: &AdminClient,
    ad_id: &str,
    req: &CreateAdRequest,
) -> Result<(), ApiError> {
    client.patch(&ad_path(ad_id), req).await
}

/// Batch-delete ads.
pub async fn batch_delete_ad(
    client: &AdminClient,
    req: &DeleteAdsRequest,
) -> Result<(), ApiError> {
    client.delete(AD_BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(SCENE_BASE, "/api/ad/scene");
        assert_eq!(scene_path("s1"), "/api/ad/scene/s1");
        assert_eq!(ad_path("a1"), "/api/ad/a1");
    }
}
