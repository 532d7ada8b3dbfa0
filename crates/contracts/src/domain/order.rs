use serde::{Deserialize, Serialize};

/// An order as the console lists it. Monetary amounts arrive already
/// converted from the server's cent-denominated storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "orderNumber", default)]
    pub order_number: String,
    #[serde(rename = "orderType", default)]
    pub order_type: u32,
    #[serde(rename = "payMethod", default)]
    pub pay_method: u32,
    #[serde(rename = "payStatus", default)]
    pub pay_status: u32,
    #[serde(rename = "payTime", default)]
    pub pay_time: String,
    #[serde(rename = "productID", default)]
    pub product_id: String,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(rename = "productSku", default)]
    pub product_sku: String,
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "refundStatus", default)]
    pub refund_status: u32,
    #[serde(rename = "refundTime", default)]
    pub refund_time: String,
    #[serde(default)]
    pub remark: String,
    #[serde(rename = "remarkAdmin", default)]
    pub remark_admin: String,
    #[serde(default)]
    pub status: u32,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "amountPay", default)]
    pub amount_pay: f64,
    #[serde(rename = "consigneeName", default)]
    pub consignee_name: String,
    #[serde(rename = "consigneePhone", default)]
    pub consignee_phone: String,
    #[serde(rename = "consigneeAddress", default)]
    pub consignee_address: String,
    #[serde(rename = "consigneeProvince", default)]
    pub consignee_province: String,
    #[serde(rename = "productImage", default)]
    pub product_image: String,
    #[serde(rename = "consigneeStreet", default)]
    pub consignee_street: String,
    #[serde(rename = "consigneeDistrict", default)]
    pub consignee_district: String,
    #[serde(rename = "consigneeCity", default)]
    pub consignee_city: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// An audit trail entry for an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLogDto {
    #[serde(rename = "orderLogID")]
    pub order_log_id: String,
    #[serde(rename = "orderID", default)]
    pub order_id: String,
    #[serde(default)]
    pub remark: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

// The list filter's `orderID` key actually carries the human-facing order
// number, not the order's primary identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListRequest {
    #[serde(rename = "orderID")]
    pub order_number: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Admin-side order amendment: the paid amount (in yuan), the admin
/// remark and the status transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(rename = "amountPay")]
    pub amount_pay: f64,
    #[serde(rename = "remarkAdmin")]
    pub remark_admin: String,
    pub status: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteOrdersRequest {
    #[serde(rename = "orderIds")]
    pub order_ids: String,
}

impl DeleteOrdersRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            order_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListData {
    pub orders: Vec<OrderDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderData {
    pub order: OrderDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderLogsData {
    #[serde(rename = "orderLogs")]
    pub order_logs: Vec<OrderLogDto>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_payload_decodes() {
        let json = r#"{"order":{"orderID":"o42","orderNumber":"20240101001","orderType":1,"payMethod":1,"payStatus":2,"payTime":"2024-01-01 10:00:00","status":2,"quantity":1,"unitPrice":19.9,"amount":19.9,"amountPay":19.9,"username":"旅人"}}"#;
        let data: OrderData = serde_json::from_str(json).unwrap();
        assert_eq!(data.order.order_id, "o42");
        assert_eq!(data.order.status, 2);
        assert!((data.order.amount_pay - 19.9).abs() < f64::EPSILON);
    }
}
