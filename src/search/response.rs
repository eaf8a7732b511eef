//! Raw shape of `GET /api/browse`.

use serde::Deserialize;

use crate::decode::{lenient_int, lenient_string, null_as_default};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Pagination", deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    #[serde(rename = "Products", deserialize_with = "null_as_default")]
    pub products: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Pagination {
    #[serde(deserialize_with = "lenient_int")]
    pub total: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SearchHit {
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_string")]
    pub colorway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media: SearchHitMedia,
    #[serde(deserialize_with = "lenient_string")]
    pub product_category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub short_description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url_key: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SearchHitMedia {
    #[serde(deserialize_with = "lenient_string")]
    pub thumb_url: String,
}
