use tracing::debug;

use crate::search::response::{SearchHit, SearchResponse};
use crate::{Error, Result};

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde_io", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Product found in search results.
///
/// Pass `product_identifier` to [`Client::get_product`](crate::Client::get_product)
/// to load its market data.
pub struct SearchResultProduct {
    /// Brand of the product
    pub brand: String,
    /// Colorway as listed on the marketplace
    pub colorway: String,
    /// URL to the thumbnail of the product
    pub image_url: String,
    /// Product category, e.g. `sneakers`
    pub category: String,
    /// Short description, usually the style code
    pub description: String,
    /// Display title
    pub title: String,
    /// URL slug identifying the product
    pub product_identifier: String,
}

impl From<SearchHit> for SearchResultProduct {
    fn from(hit: SearchHit) -> Self {
        Self {
            brand: hit.brand,
            colorway: hit.colorway,
            image_url: hit.media.thumb_url,
            category: hit.product_category,
            description: hit.short_description,
            title: hit.title,
            product_identifier: hit.url_key,
        }
    }
}

/// Decodes the body of a search response.
///
/// A response without products yields an empty list.
pub fn decode_search_response(body: &[u8]) -> Result<Vec<SearchResultProduct>> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            endpoint: "search",
            source,
        })?;

    debug!(
        total = response.pagination.total,
        hits = response.products.len(),
        "decoded search response"
    );

    Ok(response
        .products
        .into_iter()
        .map(SearchResultProduct::from)
        .collect())
}
