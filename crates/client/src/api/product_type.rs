use contracts::domain::product_type::{
    CreateProductTypeRequest, DeleteProductTypesRequest, ProductTypeListData,
    ProductTypeListRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/product/type";

fn type_path(product_type_id: &str) -> String {
    format!("{}/{}", BASE, product_type_id)
}

/// Query the product type list.
pub async fn get_type_list(
    client: &AdminClient,
    params: &ProductTypeListRequest,
) -> Result<ProductTypeListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a product type.
pub async fn create_type(
    client: &AdminClient,
    req: &CreateProductTypeRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a product type.
pub async fn update_type(
    client: &AdminClient,
    product_type_id: &str,
    req: &CreateProductTypeRequest,
) -> Result<(), ApiError> {
    client.patch(&type_path(product_type_id), req).await
}

/// Batch-delete product types.
pub async fn batch_delete_type(
    client: &AdminClient,
    req: &DeleteProductTypesRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(type_path("pt2"), "/api/product/type/pt2");
    }
}
