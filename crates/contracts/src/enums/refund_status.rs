use serde::{Deserialize, Serialize};

use super::UNKNOWN_LABEL;

/// 退款状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundStatus {
    Pending,
    Refunded,
}

impl RefundStatus {
    pub fn code(&self) -> u32 {
        match self {
            RefundStatus::Pending => 1,
            RefundStatus::Refunded => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "待退款",
            RefundStatus::Refunded => "已退款",
        }
    }

    pub fn all() -> Vec<RefundStatus> {
        vec![RefundStatus::Pending, RefundStatus::Refunded]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(RefundStatus::Pending),
            2 => Some(RefundStatus::Refunded),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|s| s.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }
}
