//! Search StockX products and fetch their market data.
//!
//! [`Client`] talks to the undocumented JSON API behind stockx.com the way
//! the browser frontend does: [`Client::search_products`] runs a free text
//! search and [`Client::get_product`] loads bids, asks and sales of every
//! size of a product. Responses are decoded into [`SearchResultProduct`] and
//! [`ProductDetails`], independent of the upstream schema.
//!
//! Use [`ClientProvider`] or [`provide_client`] to share one client, and
//! with it one cookie session, across an application.
//!
//! Feature Flags:
//! - `serde_io`: Enables serde support for the returned structs. (default)

mod client;
mod config;
mod decode;
mod error;
mod product_details;
mod provider;
pub mod request;
mod search;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use product_details::{
    decode_product_response, decode_product_response_with, sort_variants, NumericSizeOrder,
    ProductDetails, ProductDetailsVariant, SizeOrder,
};
pub use provider::{provide_client, ClientProvider};
pub use search::{decode_search_response, SearchResultProduct};
pub use transport::{HttpClient, ReqwestTransport};
