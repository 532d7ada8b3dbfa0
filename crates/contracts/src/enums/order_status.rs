use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Shipped,
    Received,
    Cancelled,
    RefundPending,
    Refunded,
}

impl OrderStatus {
    /// Wire code of the status.
    pub fn code(&self) -> u32 {
        match self {
            OrderStatus::PendingPayment => 1,
            OrderStatus::Paid => 2,
            OrderStatus::Shipped => 3,
            OrderStatus::Received => 4,
            OrderStatus::Cancelled => 5,
            OrderStatus::RefundPending => 6,
            OrderStatus::Refunded => 7,
        }
    }

    /// Display label of the status.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "待支付",
            OrderStatus::Paid => "已支付",
            OrderStatus::Shipped => "已发货",
            OrderStatus::Received => "已收货",
            OrderStatus::Cancelled => "已取消",
            OrderStatus::RefundPending => "待退款",
            OrderStatus::Refunded => "已退款",
        }
    }

    /// All statuses in declaration order.
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::PendingPayment,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Received,
            OrderStatus::Cancelled,
            OrderStatus::RefundPending,
            OrderStatus::Refunded,
        ]
    }

    /// Parse a wire code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(OrderStatus::PendingPayment),
            2 => Some(OrderStatus::Paid),
            3 => Some(OrderStatus::Shipped),
            4 => Some(OrderStatus::Received),
            5 => Some(OrderStatus::Cancelled),
            6 => Some(OrderStatus::RefundPending),
            7 => Some(OrderStatus::Refunded),
            _ => None,
        }
    }

    /// Label for a raw wire code, falling back to the unknown sentinel.
    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|s| s.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Selection-control options, one per status, declaration order.
    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .into_iter()
            .map(|s| SelectOption {
                value: s.code(),
                label: s.display_name(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::label_of(1), "待支付");
        assert_eq!(OrderStatus::label_of(7), "已退款");
        assert_eq!(OrderStatus::label_of(0), "未知");
        assert_eq!(OrderStatus::label_of(8), "未知");
    }

    #[test]
    fn test_options_pair_with_table() {
        let options = OrderStatus::options();
        let all = OrderStatus::all();
        assert_eq!(options.len(), all.len());
        for (option, status) in options.iter().zip(all) {
            assert_eq!(option.value, status.code());
            assert_eq!(option.label, status.display_name());
        }
    }
}
