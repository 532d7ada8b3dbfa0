use contracts::domain::category::{
    CategoryTreeData, CreateCategoryRequest, DeleteCategoryRequest, UpdateCategoryRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/category";
const TREE: &str = "/api/category/tree";

fn category_path(category_id: &str) -> String {
    format!("{}/{}", BASE, category_id)
}

/// Fetch the full category tree.
pub async fn get_category_tree(client: &AdminClient) -> Result<CategoryTreeData, ApiError> {
    client.get_one(TREE).await
}

/// Create a category.
pub async fn create_category(
    client: &AdminClient,
    req: &CreateCategoryRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a category.
pub async fn update_category(
    client: &AdminClient,
    category_id: &str,
    req: &UpdateCategoryRequest,
) -> Result<(), ApiError> {
    client.patch(&category_path(category_id), req).await
}

/// Batch-delete categories.
pub async fn batch_delete_category(
    client: &AdminClient,
    req: &DeleteCategoryRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(TREE, "/api/category/tree");
        assert_eq!(category_path("3"), "/api/category/3");
    }
}
