use serde::{Deserialize, Serialize};

use super::product_spec::ProductSpecDto;

/// A product type binding a store category to the spec dimensions its
/// products are described by.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductTypeDto {
    #[serde(rename = "productTypeID")]
    pub product_type_id: String,
    pub title: String,
    #[serde(default)]
    pub remark: String,
    #[serde(rename = "categoryID", default)]
    pub category_id: String,
    #[serde(default)]
    pub spec: Vec<ProductSpecDto>,
    #[serde(rename = "specIds", default)]
    pub spec_ids: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for creating a product type; updates reuse the same shape.
/// `specIDs` is a comma-joined spec id list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductTypeRequest {
    pub title: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "specIDs")]
    pub spec_ids: String,
    pub remark: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductTypeListRequest {
    #[serde(rename = "productTypeID")]
    pub product_type_id: String,
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProductTypesRequest {
    #[serde(rename = "productTypeIds")]
    pub product_type_ids: String,
}

impl DeleteProductTypesRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            product_type_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductTypeListData {
    #[serde(rename = "productTypes")]
    pub product_types: Vec<ProductTypeDto>,
    pub total: i64,
}
