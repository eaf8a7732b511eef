//! Raw shape of `GET /api/products/{urlKey}?includes=market`.
//!
//! Only the fields that end up in [`ProductDetails`](crate::ProductDetails)
//! are modelled; serde ignores the rest.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::decode::{lenient_datetime, lenient_f64, lenient_int, lenient_string, null_as_default};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProductResponse {
    #[serde(rename = "Product", deserialize_with = "null_as_default")]
    pub product: Product,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Product {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_string")]
    pub colorway: String,
    #[serde(deserialize_with = "lenient_int")]
    pub minimum_bid: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub release_date: String,
    #[serde(deserialize_with = "lenient_int")]
    pub retail_price: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub shoe: String,
    #[serde(deserialize_with = "lenient_string")]
    pub short_description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub style_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url_key: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size_locale: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media: Media,
    #[serde(deserialize_with = "null_as_default")]
    pub market: Market,
    /// Size variants keyed by their uuid, in document order.
    #[serde(deserialize_with = "null_as_default")]
    pub children: IndexMap<String, Child>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Media {
    #[serde(deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub small_image_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumb_url: String,
}

/// A size variant. Children carry the same fields as their parent, but only
/// the market snapshot is read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Child {
    #[serde(deserialize_with = "null_as_default")]
    pub market: Market,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Market {
    #[serde(deserialize_with = "lenient_int")]
    pub lowest_ask: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub highest_bid: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub annual_high: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub annual_low: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub last_sale: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub last_sale_size: String,
    #[serde(rename = "salesLast72Hours", deserialize_with = "lenient_int")]
    pub sales_last_72_hours: u32,
    #[serde(deserialize_with = "lenient_datetime")]
    pub last_sale_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_f64")]
    pub lowest_ask_float: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub highest_bid_float: f64,
}
