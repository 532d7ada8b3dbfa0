use serde::{Deserialize, Serialize};

use super::UNKNOWN_LABEL;

/// 订单类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Normal,
    Point,
}

impl OrderType {
    pub fn code(&self) -> u32 {
        match self {
            OrderType::Normal => 1,
            OrderType::Point => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::Normal => "普通订单",
            OrderType::Point => "积分订单",
        }
    }

    pub fn all() -> Vec<OrderType> {
        vec![OrderType::Normal, OrderType::Point]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(OrderType::Normal),
            2 => Some(OrderType::Point),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|t| t.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }
}
