use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 规格类型 — whether a spec value is rendered as text or as an image swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecFormat {
    Text,
    Image,
}

impl SpecFormat {
    pub fn code(&self) -> u32 {
        match self {
            SpecFormat::Text => 1,
            SpecFormat::Image => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpecFormat::Text => "文字",
            SpecFormat::Image => "图片",
        }
    }

    pub fn all() -> Vec<SpecFormat> {
        vec![SpecFormat::Text, SpecFormat::Image]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SpecFormat::Text),
            2 => Some(SpecFormat::Image),
            _ => None,
        }
    }

    pub fn label_of(code: u32) -> &'static str {
        Self::from_code(code)
            .map(|f| f.display_name())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .into_iter()
            .map(|f| SelectOption {
                value: f.code(),
                label: f.display_name(),
            })
            .collect()
    }
}
