use serde::{Deserialize, Serialize};

use super::UNKNOWN_LABEL;

/// 支付方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayMethod {
    Wechat,
    Alipay,
    Point,
    Balance,
}

impl PayMethod {
    pub fn code(&self) -> u32 {
        match self {
            PayMethod::Wechat => 1,
            PayMethod::Alipay => 2,
            PayMethod::Point => 3,
            PayMethod::Balance => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PayMethod::Wechat => "微信",
            PayMethod::Alipay => "支付宝",
            PayMethod::Point => "积分",
            PayMethod::Balance => "余额",
        }
    }

    pub fn all() -> Vec<PayMethod> {
        vec![
            PayMethod::Wechat,
            PayMethod::Alipay,
            PayMethod::Point,
            PayMethod::Balance,
        ]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(PayMethod::Wechat),
            2 => Some(PayMethod::Alipay),
            3 => Some(PayMethod::Point),
            4 => Some(PayMethod::Balance),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|m| m.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PayMethod::label_of(1), "微信");
        assert_eq!(PayMethod::label_of(4), "余额");
        assert_eq!(PayMethod::label_of(5), "未知");
    }
}
