use contracts::domain::product_category::{
    CreateProductCategoryRequest, DeleteProductCategoryRequest, ProductCategoryTreeData,
    UpdateProductCategoryRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/product/category";
const TREE: &str = "/api/product/category/tree";

fn category_path(category_id: &str) -> String {
    format!("{}/{}", BASE, category_id)
}

/// Fetch the full store category tree.
pub async fn get_category_tree(client: &AdminClient) -> Result<ProductCategoryTreeData, ApiError> {
    client.get_one(TREE).await
}

/// Create a store category.
pub async fn create_category(
    client: &AdminClient,
    req: &CreateProductCategoryRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a store category.
pub async fn update_category(
    client: &AdminClient,
    category_id: &str,
    req: &UpdateProductCategoryRequest,
) -> Result<(), ApiError> {
    client.patch(&category_path(category_id), req).await
}

/// Batch-delete store categories.
pub async fn batch_delete_category(
    client: &AdminClient,
    req: &DeleteProductCategoryRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(TREE, "/api/product/category/tree");
        assert_eq!(category_path("9"), "/api/product/category/9");
    }
}
