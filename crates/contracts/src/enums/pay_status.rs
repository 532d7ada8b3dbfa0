use serde::{Deserialize, Serialize};

use super::UNKNOWN_LABEL;

/// 支付状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayStatus {
    Pending,
    Paid,
    Refunded,
}

impl PayStatus {
    pub fn code(&self) -> u32 {
        match self {
            PayStatus::Pending => 1,
            PayStatus::Paid => 2,
            PayStatus::Refunded => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PayStatus::Pending => "待支付",
            PayStatus::Paid => "已支付",
            PayStatus::Refunded => "已退款",
        }
    }

    pub fn all() -> Vec<PayStatus> {
        vec![PayStatus::Pending, PayStatus::Paid, PayStatus::Refunded]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(PayStatus::Pending),
            2 => Some(PayStatus::Paid),
            3 => Some(PayStatus::Refunded),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|s| s.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PayStatus::label_of(2), "已支付");
        assert_eq!(PayStatus::label_of(0), "未知");
    }
}
