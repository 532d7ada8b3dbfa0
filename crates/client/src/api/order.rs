use contracts::domain::order::{
    DeleteOrdersRequest, OrderData, OrderListData, OrderListRequest, OrderLogsData,
    UpdateOrderRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/order";

fn order_path(order_id: &str) -> String {
    format!("{}/{}", BASE, order_id)
}

fn order_log_path(order_id: &str) -> String {
    format!("{}/log/{}", BASE, order_id)
}

/// Query the order list.
pub async fn get_order_list(
    client: &AdminClient,
    params: &OrderListRequest,
) -> Result<OrderListData, ApiError> {
    client.get(BASE, params).await
}

/// Amend an order: paid amount, status transition, admin remark.
pub async fn update_order(
    client: &AdminClient,
    order_id: &str,
    req: &UpdateOrderRequest,
) -> Result<(), ApiError> {
    client.patch(&order_path(order_id), req).await
}

/// Batch-delete orders.
pub async fn batch_delete_order(
    client: &AdminClient,
    req: &DeleteOrdersRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

/// Fetch one order.
pub async fn get_order_detail(client: &AdminClient, order_id: &str) -> Result<OrderData, ApiError> {
    client.get_one(&order_path(order_id)).await
}

/// Fetch an order's audit trail.
pub async fn get_order_log(
    client: &AdminClient,
    order_id: &str,
) -> Result<OrderLogsData, ApiError> {
    client.get_one(&order_log_path(order_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(order_path("42"), "/api/order/42");
        assert_eq!(order_log_path("42"), "/api/order/log/42");
    }
}
