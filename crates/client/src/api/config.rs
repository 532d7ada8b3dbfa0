use contracts::domain::config::{
    ConfigData, ConfigListData, ConfigListRequest, CreateConfigRequest, DeleteConfigsRequest,
    UpdateConfigRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/config";

fn config_path(config_id: &str) -> String {
    format!("{}/{}", BASE, config_id)
}

/// Query the content-configuration list.
pub async fn get_config_list(
    client: &AdminClient,
    params: &ConfigListRequest,
) -> Result<ConfigListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a configuration document.
pub async fn create_config(
    client: &AdminClient,
    req: &CreateConfigRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a configuration document.
pub async fn update_config(
    client: &AdminClient,
    config_id: &str,
    req: &UpdateConfigRequest,
) -> Result<(), ApiError> {
    client.patch(&config_path(config_id), req).await
}

/// Fetch one configuration document.
pub async fn get_config_detail(
    client: &AdminClient,
    config_id: &str,
) -> Result<ConfigData, ApiError> {
    client.get_one(&config_path(config_id)).await
}

/// Batch-delete configuration documents.
pub async fn batch_delete_config(
    client: &AdminClient,
    req: &DeleteConfigsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(config_path("k1"), "/api/config/k1");
    }
}
