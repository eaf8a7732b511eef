use tracing::debug;

use crate::product_details::ordering::{sort_variants, NumericSizeOrder, SizeOrder};
use crate::product_details::response::{Child, Product, ProductResponse};
use crate::product_details::ProductDetailsVariant;
use crate::{Error, Result};

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde_io", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
/// Details and market data of a StockX product.
///
/// Use [`Client::get_product`](crate::Client::get_product) to fetch it by the
/// `product_identifier` of a search result.
///
/// The upstream API does not report unknown products as errors. An identifier
/// that matches nothing may come back as a details value without any identity
/// fields, check [`ProductDetails::is_empty`] before using it.
pub struct ProductDetails {
    pub id: String,
    pub uuid: String,
    /// URL slug of the product.
    pub product_identifier: String,
    pub brand: String,
    pub colorway: String,
    pub name: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    /// Manufacturer style code.
    pub style_id: String,
    pub shoe: String,
    pub size_locale: String,
    pub size_title: String,
    pub release_date: String,
    /// Lowest bid the marketplace accepts.
    pub minimum_bid: i64,
    pub retail_price: i64,
    pub image_url: String,
    pub small_image_url: String,
    pub thumb_url: String,
    /// Lowest ask across all sizes.
    pub lowest_ask: i64,
    pub lowest_ask_float: f64,
    /// Highest bid across all sizes.
    pub highest_bid: i64,
    pub highest_bid_float: f64,
    /// Sizes that have been sold at least once, ascending by size.
    pub variants: Vec<ProductDetailsVariant>,
}

impl ProductDetails {
    /// Whether the response carried no product at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.uuid.is_empty() && self.product_identifier.is_empty()
    }

    fn from_raw<O>(product: Product, order: &O) -> Self
    where
        O: SizeOrder + ?Sized,
    {
        let mut variants = product
            .children
            .into_iter()
            .filter_map(|(uuid, child)| variant_from_child(uuid, child))
            .collect::<Vec<_>>();
        sort_variants(&mut variants, order);

        Self {
            id: product.id,
            uuid: product.uuid,
            product_identifier: product.url_key,
            brand: product.brand,
            colorway: product.colorway,
            name: product.name,
            title: product.title,
            short_description: product.short_description,
            description: product.description,
            style_id: product.style_id,
            shoe: product.shoe,
            size_locale: product.size_locale,
            size_title: product.size_title,
            release_date: product.release_date,
            minimum_bid: product.minimum_bid,
            retail_price: product.retail_price,
            image_url: product.media.image_url,
            small_image_url: product.media.small_image_url,
            thumb_url: product.media.thumb_url,
            lowest_ask: product.market.lowest_ask,
            lowest_ask_float: product.market.lowest_ask_float,
            highest_bid: product.market.highest_bid,
            highest_bid_float: product.market.highest_bid_float,
            variants,
        }
    }
}

/// Sizes without a last sale have never traded and are dropped.
fn variant_from_child(uuid: String, child: Child) -> Option<ProductDetailsVariant> {
    let market = child.market;
    if market.last_sale_size.is_empty() {
        return None;
    }

    Some(ProductDetailsVariant {
        uuid,
        size: market.last_sale_size,
        lowest_ask: market.lowest_ask,
        highest_bid: market.highest_bid,
        annual_high: market.annual_high,
        annual_low: market.annual_low,
        last_sale: market.last_sale,
        sales_last_72_hours: market.sales_last_72_hours,
        last_sale_date: market.last_sale_date,
        lowest_ask_float: market.lowest_ask_float,
        highest_bid_float: market.highest_bid_float,
    })
}

/// Decodes the body of a product response, ordering variants by numeric size.
pub fn decode_product_response(body: &[u8]) -> Result<ProductDetails> {
    decode_product_response_with(body, &NumericSizeOrder)
}

/// Decodes the body of a product response, ordering variants with `order`.
pub fn decode_product_response_with<O>(body: &[u8], order: &O) -> Result<ProductDetails>
where
    O: SizeOrder + ?Sized,
{
    let response: ProductResponse =
        serde_json::from_slice(body).map_err(|source| Error::Decode {
            endpoint: "product",
            source,
        })?;

    let sizes = response.product.children.len();
    let details = ProductDetails::from_raw(response.product, order);
    debug!(
        product = %details.product_identifier,
        sizes,
        traded_sizes = details.variants.len(),
        "decoded product response"
    );

    Ok(details)
}
