use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 商品状态 — listed or delisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Listed,
    Delisted,
}

impl ProductStatus {
    pub fn code(&self) -> u32 {
        match self {
            ProductStatus::Listed => 1,
            ProductStatus::Delisted => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Listed => "上架",
            ProductStatus::Delisted => "下架",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![ProductStatus::Listed, ProductStatus::Delisted]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ProductStatus::Listed),
            2 => Some(ProductStatus::Delisted),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|s| s.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }

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
    fn test_options_order_matches_declaration() {
        let options = ProductStatus::options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, 1);
        assert_eq!(options[0].label, "上架");
        assert_eq!(options[1].value, 2);
        assert_eq!(options[1].label, "下架");
    }
}
