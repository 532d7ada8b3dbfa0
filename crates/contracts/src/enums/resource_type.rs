use serde::{Deserialize, Serialize};

use crate::shared::SelectOption;

use super::UNKNOWN_LABEL;

/// 资源类型 — media library file categories.
///
/// Code 0 is the "everything" filter the resource browser starts on; the
/// remaining codes mirror the server's file-type detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    All,
    Image,
    Video,
    Audio,
    Archive,
    Document,
    Font,
    App,
}

impl ResourceType {
    pub fn code(&self) -> u32 {
        match self {
            ResourceType::All => 0,
            ResourceType::Image => 1,
            ResourceType::Video => 2,
            ResourceType::Audio => 3,
            ResourceType::Archive => 4,
            ResourceType::Document => 5,
            ResourceType::Font => 6,
            ResourceType::App => 7,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::All => "全部",
            ResourceType::Image => "图片",
            ResourceType::Video => "视频",
            ResourceType::Audio => "音频",
            ResourceType::Archive => "压缩包",
            ResourceType::Document => "文档",
            ResourceType::Font => "字体",
            ResourceType::App => "应用",
        }
    }

    pub fn all() -> Vec<ResourceType> {
        vec![
            ResourceType::All,
            ResourceType::Image,
            ResourceType::Video,
            ResourceType::Audio,
            ResourceType::Archive,
            ResourceType::Document,
            ResourceType::Font,
            ResourceType::App,
        ]
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(ResourceType::All),
            1 => Some(ResourceType::Image),
            2 => Some(ResourceType::Video),
            3 => Some(ResourceType::Audio),
            4 => Some(ResourceType::Archive),
            5 => Some(ResourceType::Document),
            6 => Some(ResourceType::Font),
            7 => Some(ResourceType::App),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_dense() {
        for code in 0..8 {
            assert!(ResourceType::from_code(code).is_some());
        }
        assert!(ResourceType::from_code(8).is_none());
    }

    #[test]
    fn test_options_cardinality() {
        assert_eq!(ResourceType::options().len(), ResourceType::all().len());
    }
}
