use contracts::domain::tag::{CreateTagRequest, DeleteTagsRequest, TagListData, TagListRequest};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/tag";

fn tag_path(tag_id: &str) -> String {
    format!("{}/{}", BASE, tag_id)
}

/// Query the tag list.
pub async fn get_tag_list(
    client: &AdminClient,
    params: &TagListRequest,
) -> Result<TagListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a tag.
pub async fn create_tag(client: &AdminClient, req: &CreateTagRequest) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a tag.
pub async fn update_tag(
    client: &AdminClient,
    tag_id: &str,
    req: &CreateTagRequest,
) -> Result<(), ApiError> {
    client.patch(&tag_path(tag_id), req).await
}

/// Batch-delete tags.
pub async fn batch_delete_tag(
    client: &AdminClient,
    req: &DeleteTagsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(tag_path("t8"), "/api/tag/t8");
    }
}
