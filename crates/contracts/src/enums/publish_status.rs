use serde::{Deserialize, Serialize};

/// 发布状态 — draft vs. published content.
///
/// The console only compares against these codes; there is no label table
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishStatus {
    Unpublished,
    Published,
}

impl PublishStatus {
    pub fn code(&self) -> u32 {
        match self {
            PublishStatus::Unpublished => 1,
            PublishStatus::Published => 2,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(PublishStatus::Unpublished),
            2 => Some(PublishStatus::Published),
            _ => None,
        }
    }
}
