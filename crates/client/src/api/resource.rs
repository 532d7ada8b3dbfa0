use contracts::domain::resource::{
    DeleteResourcesRequest, ResourceListData, ResourceListRequest, UpdateResourceRequest,
    UploadData,
};
use reqwest::multipart::{Form, Part};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/resource";
const UPLOAD: &str = "/api/resource/upload";

fn resource_path(resource_id: &str) -> String {
    format!("{}/{}", BASE, resource_id)
}

/// Query the media library.
pub async fn get_resource_list(
    client: &AdminClient,
    params: &ResourceListRequest,
) -> Result<ResourceListData, ApiError> {
    client.get(BASE, params).await
}

/// Upload a file to the media library. The server detects the file type
/// from the name's extension and pushes the bytes to the CDN.
pub async fn upload_resource(
    client: &AdminClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<UploadData, ApiError> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part("file", part);
    client.post_multipart(UPLOAD, form).await
}

/// Update a resource's title/description.
pub async fn update_resource(
    client: &AdminClient,
    resource_id: &str,
    req: &UpdateResourceRequest,
) -> Result<(), ApiError> {
    client.patch(&resource_path(resource_id), req).await
}

/// Delete resources.
pub async fn delete_resource(
    client: &AdminClient,
    req: &DeleteResourcesRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(UPLOAD, "/api/resource/upload");
        assert_eq!(resource_path("r1"), "/api/resource/r1");
    }
}
