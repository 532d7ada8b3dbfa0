use serde::{Deserialize, Serialize};

/// A product spec dimension (颜色, 尺寸, …) with its value rows under
/// the wire key `item`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSpecDto {
    #[serde(rename = "productSpecID")]
    pub product_spec_id: String,
    pub title: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub format: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sort: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "item", default)]
    pub items: Vec<ProductSpecItemDto>,
}

/// A single spec value (红色, XL, …).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSpecItemDto {
    #[serde(rename = "productSpecItemID")]
    pub item_id: String,
    pub title: String,
    #[serde(rename = "specID", default)]
    pub spec_id: String,
    #[serde(default)]
    pub sort: u32,
    #[serde(default)]
    pub enabled: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for creating a spec; updates reuse the same shape. `format`
/// selects text vs. image rendering of the values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductSpecRequest {
    pub title: String,
    pub sort: u32,
    pub image: String,
    pub remark: String,
    pub format: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSpecListRequest {
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProductSpecRequest {
    #[serde(rename = "productSpecIds")]
    pub product_spec_ids: String,
}

impl DeleteProductSpecRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            product_spec_ids: ids.join(","),
        }
    }
}

/// Body for creating a spec value; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductSpecItemRequest {
    pub title: String,
    #[serde(rename = "specID")]
    pub spec_id: String,
    pub sort: u32,
    pub enabled: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSpecItemListRequest {
    #[serde(rename = "specID")]
    pub spec_id: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProductSpecItemsRequest {
    #[serde(rename = "productSpecItemIds")]
    pub product_spec_item_ids: String,
}

impl DeleteProductSpecItemsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            product_spec_item_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductSpecListData {
    #[serde(rename = "productSpecs")]
    pub product_specs: Vec<ProductSpecDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductSpecItemListData {
    #[serde(rename = "productSpecItems")]
    pub product_spec_items: Vec<ProductSpecItemDto>,
    pub total: i64,
}

/// Payload of the spec-with-items detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSpecInfoData {
    #[serde(rename = "productSpecAndItem")]
    pub product_spec_and_item: Vec<ProductSpecDto>,
}
