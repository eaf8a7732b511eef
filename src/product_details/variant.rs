use chrono::{DateTime, Utc};

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde_io", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
/// Market snapshot of a single size of a product.
///
/// Amounts are integers in the currency the client was configured with.
pub struct ProductDetailsVariant {
    /// Upstream key of the variant.
    pub uuid: String,
    /// Size in the product's size locale, e.g. `"9.5"`.
    pub size: String,
    pub lowest_ask: i64,
    pub highest_bid: i64,
    pub annual_high: i64,
    pub annual_low: i64,
    pub last_sale: i64,
    /// Number of sales in the last 72 hours.
    pub sales_last_72_hours: u32,
    /// When the last sale happened, if the upstream reported a valid date.
    pub last_sale_date: Option<DateTime<Utc>>,
    pub lowest_ask_float: f64,
    pub highest_bid_float: f64,
}
