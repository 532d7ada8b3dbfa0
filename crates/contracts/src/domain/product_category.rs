use serde::{Deserialize, Serialize};

/// A store category tree node, scoped to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCategoryDto {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(rename = "productCategoryID", default)]
    pub product_category_id: String,
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
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<u32>,
    #[serde(default)]
    pub children: Vec<ProductCategoryDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductCategoryRequest {
    pub title: String,
    pub icon: String,
    pub path: String,
    pub sort: u32,
    pub status: u32,
    pub hidden: u32,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub description: String,
    #[serde(rename = "parentID")]
    pub parent_id: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductCategoryRequest {
    pub title: String,
    pub icon: String,
    pub path: String,
    pub sort: u32,
    pub status: u32,
    pub hidden: u32,
    #[serde(rename = "parentID")]
    pub parent_id: u32,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProductCategoryRequest {
    #[serde(rename = "productCategoryIds")]
    pub product_category_ids: String,
}

impl DeleteProductCategoryRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            product_category_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCategoryTreeData {
    #[serde(rename = "productCategoryTree")]
    pub product_category_tree: Vec<ProductCategoryDto>,
}
