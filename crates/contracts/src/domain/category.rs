use serde::{Deserialize, Serialize};

/// A content category. The tree endpoint returns these nested via
/// `children`; `parent_id` refers to the numeric primary key `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub sort: u32,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub hidden: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub status: Option<u32>,
    #[serde(default)]
    pub children: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub title: String,
    pub icon: String,
    pub path: String,
    pub sort: u32,
    pub status: u32,
    pub hidden: u32,
    pub description: String,
    #[serde(rename = "parentID")]
    pub parent_id: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub title: String,
    pub icon: String,
    pub path: String,
    pub sort: u32,
    pub status: u32,
    pub hidden: u32,
    #[serde(rename = "parentID")]
    pub parent_id: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    #[serde(rename = "categoryIds")]
    pub category_ids: String,
}

impl DeleteCategoryRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            category_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTreeData {
    #[serde(rename = "categoryTree")]
    pub category_tree: Vec<CategoryDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_decodes_recursively() {
        let json = r#"{"categoryTree":[{"ID":1,"categoryID":"c1","title":"根分类","children":[{"ID":2,"categoryID":"c2","parentID":1,"title":"子分类","children":[]}]}]}"#;
        let data: CategoryTreeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.category_tree.len(), 1);
        assert_eq!(data.category_tree[0].children[0].parent_id, Some(1));
    }
}
