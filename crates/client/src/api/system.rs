use contracts::system::{SystemConfigData, UpdateSystemConfigRequest};

use crate::client::AdminClient;
use crate::error::ApiError;

// Reads and writes route differently for the system configuration.
const GET_BASE: &str = "/api/base/config";
const UPDATE_BASE: &str = "/api/system";

/// Fetch the site-wide system configuration.
pub async fn get_config(client: &AdminClient) -> Result<SystemConfigData, ApiError> {
    client.get_one(GET_BASE).await
}

/// Update the site-wide system configuration.
pub async fn update_config(
    client: &AdminClient,
    req: &UpdateSystemConfigRequest,
) -> Result<(), ApiError> {
    client.patch(UPDATE_BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(GET_BASE, "/api/base/config");
        assert_eq!(UPDATE_BASE, "/api/system");
    }
}
