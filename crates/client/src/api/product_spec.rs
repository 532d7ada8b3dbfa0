//! Product specs and their value rows share the `/api/product/spec`
//! routing prefix.

use contracts::domain::product_spec::{
    CreateProductSpecItemRequest, CreateProductSpecRequest, DeleteProductSpecItemsRequest,
    DeleteProductSpecRequest, ProductSpecItemListData, ProductSpecItemListRequest,
    ProductSpecListData, ProductSpecListRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/product/spec";
const ITEM_BASE: &str = "/api/product/spec/item";

fn spec_path(spec_id: &str) -> String {
    format!("{}/{}", BASE, spec_id)
}

fn item_path(item_id: &str) -> String {
    format!("{}/{}", ITEM_BASE, item_id)
}

/// Query the spec list.
pub async fn get_spec_list(
    client: &AdminClient,
    params: &ProductSpecListRequest,
) -> Result<ProductSpecListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a spec dimension.
pub async fn create_spec(
    client: &AdminClient,
    req: &CreateProductSpecRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a spec dimension.
pub async fn update_spec(
    client: &AdminClient,
    spec_id: &str,
    req: &CreateProductSpecRequest,
) -> Result<(), ApiError> {
    client.patch(&spec_path(spec_id), req).await
}

/// Batch-delete spec dimensions.
pub async fn batch_delete_spec(
    client: &AdminClient,
    req: &DeleteProductSpecRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

/// Query the spec value list.
pub async fn get_spec_item_list(
    client: &AdminClient,
    params: &ProductSpecItemListRequest,
) -> Result<ProductSpecItemListData, ApiError> {
    client.get(ITEM_BASE, params).await
}

/// Create a spec value.
pub async fn create_spec_item(
    client: &AdminClient,
    req: &CreateProductSpecItemRequest,
) -> Result<(), ApiError> {
    client.post(ITEM_BASE, req).await
}

/// Update a spec value.
pub async fn update_spec_item(
    client: &AdminClient,
    item_id: &str,
    req: &CreateProductSpecItemRequest,
) -> Result<(), ApiError> {
    client.patch(&item_path(item_id), req).await
}

/// Batch-delete spec values.
pub async fn batch_delete_spec_item(
    client: &AdminClient,
    req: &DeleteProductSpecItemsRequest,
) -> Result<(), ApiError> {
    client.delete(ITEM_BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(spec_path("s1"), "/api/product/spec/s1");
        assert_eq!(ITEM_BASE, "/api/product/spec/item");
        assert_eq!(item_path("i1"), "/api/product/spec/item/i1");
    }
}
