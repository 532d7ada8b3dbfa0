use contracts::domain::column::{
    ColumnListData, ColumnListRequest, CreateColumnRequest, DeleteColumnsRequest,
    UpdateColumnRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/column";

fn column_path(column_id: &str) -> String {
    format!("{}/{}", BASE, column_id)
}

/// Query the column list.
pub async fn get_column_list(
    client: &AdminClient,
    params: &ColumnListRequest,
) -> Result<ColumnListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a column.
pub async fn create_column(
    client: &AdminClient,
    req: &CreateColumnRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a column.
pub async fn update_column(
    client: &AdminClient,
    column_id: &str,
    req: &UpdateColumnRequest,
) -> Result<(), ApiError> {
    client.patch(&column_path(column_id), req).await
}

/// Batch-delete columns.
pub async fn batch_delete_column(
    client: &AdminClient,
    req: &DeleteColumnsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(column_path("c2"), "/api/column/c2");
    }
}
