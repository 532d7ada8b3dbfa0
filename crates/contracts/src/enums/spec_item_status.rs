use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 规格值状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecItemStatus {
    Enabled,
    Disabled,
}

impl SpecItemStatus {
    pub fn code(&self) -> u32 {
        match self {
            SpecItemStatus::Enabled => 1,
            SpecItemStatus::Disabled => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpecItemStatus::Enabled => "启用",
            SpecItemStatus::Disabled => "禁用",
        }
    }

    pub fn all() -> Vec<SpecItemStatus> {
        vec![SpecItemStatus::Enabled, SpecItemStatus::Disabled]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SpecItemStatus::Enabled),
            2 => Some(SpecItemStatus::Disabled),
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
