use serde::{Deserialize, Serialize};

/// 评论对象类型 — what a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Article,
    Goods,
}

impl ObjectType {
    pub fn code(&self) -> u32 {
        match self {
            ObjectType::Article => 1,
            ObjectType::Goods => 2,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ObjectType::Article),
            2 => Some(ObjectType::Goods),
            _ => None,
        }
    }
}
