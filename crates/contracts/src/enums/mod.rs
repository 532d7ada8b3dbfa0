//! Static domain tables: wire code → display label.
//!
//! Codes are stable and immutable at runtime. Lookups on a code outside a
//! table's declared domain resolve to [`UNKNOWN_LABEL`] — the console never
//! renders an empty cell for a code the server added ahead of us.

pub mod object_type;
pub mod order_status;
pub mod order_type;
pub mod pay_method;
pub mod pay_status;
pub mod product_status;
pub mod publish_status;
pub mod refund_status;
pub mod resource_type;
pub mod sex;
pub mod spec_format;
pub mod spec_item_status;
pub mod url_type;

pub use object_type::ObjectType;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use pay_method::PayMethod;
pub use pay_status::PayStatus;
pub use product_status::ProductStatus;
pub use publish_status::PublishStatus;
pub use refund_status::RefundStatus;
pub use resource_type::ResourceType;
pub use sex::Sex;
pub use spec_format::SpecFormat;
pub use spec_item_status::SpecItemStatus;
pub use url_type::UrlType;

/// Sentinel label for codes with no entry in their table.
pub const UNKNOWN_LABEL: &str = "未知";
