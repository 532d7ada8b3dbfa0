use contracts::domain::product::{
    CreateProductRequest, DeleteProductsRequest, ProductData, ProductListData, ProductListRequest,
};
use contracts::domain::product_spec::ProductSpecInfoData;

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/product";

fn product_path(product_id: &str) -> String {
    format!("{}/{}", BASE, product_id)
}

// The spec-with-items view of a product type routes under the product
// prefix, not under /api/product/spec.
fn spec_info_path(product_type_id: &str) -> String {
    format!("{}/spec/info/{}", BASE, product_type_id)
}

/// Query the product list.
pub async fn get_product_list(
    client: &AdminClient,
    params: &ProductListRequest,
) -> Result<ProductListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a product with its SKU rows.
pub async fn create_product(
    client: &AdminClient,
    req: &CreateProductRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a product.
pub async fn update_product(
    client: &AdminClient,
    product_id: &str,
    req: &CreateProductRequest,
) -> Result<(), ApiError> {
    client.patch(&product_path(product_id), req).await
}

/// Batch-delete products.
pub async fn batch_delete_product(
    client: &AdminClient,
    req: &DeleteProductsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

/// Fetch one product.
pub async fn get_product_detail(
    client: &AdminClient,
    product_id: &str,
) -> Result<ProductData, ApiError> {
    client.get_one(&product_path(product_id)).await
}

/// Fetch the spec dimensions (with values) for a product type.
pub async fn get_spec_detail(
    client: &AdminClient,
    product_type_id: &str,
) -> Result<ProductSpecInfoData, ApiError> {
    client.get_one(&spec_info_path(product_type_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(product_path("p3"), "/api/product/p3");
        assert_eq!(spec_info_path("pt1"), "/api/product/spec/info/pt1");
    }
}
