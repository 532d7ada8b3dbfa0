use serde::{Deserialize, Serialize};

/// A product with its SKU rows. `Htmlcontent` keeps its historical wire
/// capitalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub title: String,
    #[serde(rename = "productNumber", default)]
    pub product_number: String,
    #[serde(rename = "projectID", default)]
    pub project_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: String,
    #[serde(rename = "buyLimit", default)]
    pub buy_limit: u32,
    #[serde(rename = "categoryID", default)]
    pub category_id: String,
    #[serde(rename = "specIds", default)]
    pub spec_ids: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "Htmlcontent", default)]
    pub html_content: String,
    #[serde(default)]
    pub enable: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub sku: Vec<ProductSkuDto>,
}

/// A SKU row as returned by the server; price fields are snake_case on
/// the wire, unlike the camelCase request shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSkuDto {
    #[serde(rename = "skuID")]
    pub sku_id: String,
    #[serde(rename = "skuTitle", default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "cost_price", default)]
    pub cost_price: f64,
    #[serde(rename = "market_price", default)]
    pub market_price: f64,
    #[serde(rename = "unit_price", default)]
    pub unit_price: f64,
    #[serde(rename = "unit_point", default)]
    pub unit_point: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "enable_default", default)]
    pub enable_default: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// A SKU row as submitted with a create/update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkuRequest {
    #[serde(rename = "skuID")]
    pub sku_id: String,
    #[serde(rename = "skuTitle")]
    pub title: String,
    pub image: String,
    #[serde(rename = "costPrice")]
    pub cost_price: f64,
    #[serde(rename = "marketPrice")]
    pub market_price: f64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(rename = "unitPoint")]
    pub unit_point: f64,
    pub quantity: u32,
    #[serde(rename = "enableDefault")]
    pub enable_default: u32,
}

/// Body for creating a product; updates reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "productNumber")]
    pub product_number: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub description: String,
    pub images: Vec<String>,
    pub video: String,
    #[serde(rename = "buyLimit")]
    pub buy_limit: u32,
    #[serde(rename = "productSpec")]
    pub product_spec: String,
    pub content: String,
    #[serde(rename = "Htmlcontent")]
    pub html_content: String,
    pub enable: u32,
    pub sku: Vec<SkuRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListRequest {
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub title: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProductsRequest {
    #[serde(rename = "productIds")]
    pub product_ids: String,
}

impl DeleteProductsRequest {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            product_ids: ids.join(","),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListData {
    pub products: Vec<ProductDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductData {
    pub product: ProductDto,
}
