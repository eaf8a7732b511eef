use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use crate::request::{impersonation_headers, product_details_url, search_url, BASE_URL};
use crate::transport::{HttpClient, HttpRequest, ReqwestTransport};
use crate::{
    decode_product_response, decode_search_response, ClientConfig, Error, ProductDetails, Result,
    SearchResultProduct,
};

/// Client for the StockX JSON API.
///
/// The first call performs a warm-up request against the landing page so the
/// transport holds the session cookies the API expects. Concurrent first
/// calls share a single warm-up; a failed warm-up is retried on the next call.
///
/// ```no_run
/// use stockx_client::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("EUR", "DE", false)?;
///     let results = client.search_products("adidas yeezy foam rnnr onyx", 10).await?;
///     if let Some(first) = results.first() {
///         let details = client.get_product(&first.product_identifier).await?;
///         println!("{:#?}", details);
///     }
///     Ok(())
/// }
/// ```
pub struct Client {
    config: ClientConfig,
    headers: HeaderMap,
    http: Arc<dyn HttpClient>,
    initialized: OnceCell<()>,
}

impl Client {
    /// Builds a client with the default `reqwest` transport.
    pub fn new(currency: &str, locale: &str, vat_registered: bool) -> Result<Self> {
        Self::from_config(ClientConfig::new(currency, locale, vat_registered))
    }

    /// Builds a client with the default `reqwest` transport from a full config.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout, config.proxy.as_deref())
            .map_err(Error::Construction)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Builds a client on top of any [`HttpClient`].
    ///
    /// Currency and locale are upper-cased here.
    pub fn with_transport(mut config: ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        config.currency = config.currency.to_uppercase();
        config.locale = config.locale.to_uppercase();

        Self {
            config,
            headers: impersonation_headers(),
            http,
            initialized: OnceCell::new(),
        }
    }

    /// Config with currency and locale upper-cased.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether the warm-up request has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Searches products, returning at most `limit` hits from the first page.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultProduct>> {
        self.initialize().await?;

        let body = self.fetch("search", search_url(query, limit)).await?;
        decode_search_response(&body)
    }

    /// Loads details and per-size market data of a product.
    ///
    /// `product_identifier` is the URL slug found in
    /// [`SearchResultProduct::product_identifier`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_identifier: &str) -> Result<ProductDetails> {
        self.initialize().await?;

        let url = product_details_url(
            product_identifier,
            &self.config.currency,
            &self.config.locale,
            self.config.vat_registered,
        );
        let body = self.fetch("product", url).await?;
        decode_product_response(&body)
    }

    /// Routes all further requests through `proxy_url`.
    pub fn set_proxy(&self, proxy_url: &str) -> Result<()> {
        self.http
            .set_proxy(proxy_url)
            .map_err(|source| Error::Proxy {
                url: proxy_url.to_string(),
                source,
            })
    }

    /// The proxy in use, or an empty string.
    pub fn proxy(&self) -> String {
        self.http.proxy()
    }

    async fn initialize(&self) -> Result<()> {
        self.initialized.get_or_try_init(|| self.warm_up()).await?;
        Ok(())
    }

    async fn warm_up(&self) -> Result<()> {
        let response = self
            .http
            .execute(HttpRequest::get(BASE_URL, self.headers.clone()))
            .await
            .map_err(Error::Initialization)?;

        info!(url = BASE_URL, status = %response.status, "stockx warm-up response");

        if response.status != StatusCode::OK {
            return Err(Error::WarmupStatus(response.status));
        }
        Ok(())
    }

    async fn fetch(&self, operation: &'static str, url: String) -> Result<Vec<u8>> {
        let response = match self
            .http
            .execute(HttpRequest::get(url.as_str(), self.headers.clone()))
            .await
        {
            Ok(response) => response,
            Err(source) => {
                return Err(Error::Transport {
                    operation,
                    url,
                    source,
                })
            }
        };

        info!(%url, status = %response.status, "stockx api response");
        debug!(%url, body = %String::from_utf8_lossy(&response.body), "stockx api response body");

        if !response.status.is_success() {
            // error bodies are still JSON and decode to empty values
            warn!(%url, status = %response.status, "stockx api answered {operation} with an error status");
        }

        Ok(response.body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
