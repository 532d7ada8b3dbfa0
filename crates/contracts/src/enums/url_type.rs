use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 推广位链接类型 — what an ad's URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlType {
    Link,
    Article,
    Goods,
}

impl UrlType {
    pub fn code(&self) -> u32 {
        match self {
            UrlType::Link => 1,
            UrlType::Article => 2,
            UrlType::Goods => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UrlType::Link => "链接",
            UrlType::Article => "文章",
            UrlType::Goods => "商品",
        }
    }

    pub fn all() -> Vec<UrlType> {
        vec![UrlType::Link, UrlType::Article, UrlType::Goods]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(UrlType::Link),
            2 => Some(UrlType::Article),
            3 => Some(UrlType::Goods),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|t| t.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .into_iter()
            .map(|t| SelectOption {
                value: t.code(),
                label: t.display_name(),
            })
            .collect()
    }
}
