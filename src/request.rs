//! URLs and headers for the StockX JSON API.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use url::form_urlencoded::byte_serialize;

/// Landing page requested once to seed the session cookies.
pub const BASE_URL: &str = "https://stockx.com/";

const SEARCH_ENDPOINT: &str = "https://stockx.com/api/browse";
const PRODUCTS_ENDPOINT: &str = "https://stockx.com/api/products";

/// Properties requested for every search hit.
const SEARCH_PROPERTIES: [&str; 7] = [
    "brand",
    "colorway",
    "media.thumbUrl",
    "title",
    "productCategory",
    "shortDescription",
    "urlKey",
];

const VAT_REGISTERED_SUFFIX: &str = ".vat-registered";

/// Order in which the impersonation headers are sent.
///
/// Bot detection on the upstream side looks at which headers are present and
/// in what order, so this mirrors what the impersonated browser emits.
pub const HEADER_ORDER: [&str; 15] = [
    "accept",
    "accept-language",
    "app-platform",
    "app-version",
    "cache-control",
    "pragma",
    "referer",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "sec-fetch-dest",
    "sec-fetch-mode",
    "sec-fetch-site",
    "user-agent",
    "x-requested-with",
];

/// Builds the browser impersonation headers, inserted in [`HEADER_ORDER`].
pub fn impersonation_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("de-DE,de;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(
        HeaderName::from_static("app-platform"),
        HeaderValue::from_static("Iron"),
    );
    headers.insert(
        HeaderName::from_static("app-version"),
        HeaderValue::from_static("2022.07.17.01"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://stockx.com/de-de"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(
            r#"".Not/A)Brand";v="99", "Google Chrome";v="103", "Chromium";v="103""#,
        ),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static(r#""macOS""#),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    );
    headers
}

/// Joins the words of a query with `+`.
///
/// Queries that already contain a `+` are treated as prepared by the caller
/// and returned untouched, spaces included.
pub fn normalize_query(query: &str) -> String {
    if !query.contains('+') && query.contains(' ') {
        query.split(' ').collect::<Vec<_>>().join("+")
    } else {
        query.to_string()
    }
}

/// Search URL for the first page of results.
///
/// `limit` is forwarded as `resultsPerPage` as is; the upstream caps it.
/// A query containing `+` is embedded exactly as given, any other query has
/// its words form encoded and joined with `+`.
pub fn search_url(query: &str, limit: usize) -> String {
    let encoded_query = if query.contains('+') {
        normalize_query(query)
    } else {
        query
            .split(' ')
            .map(|word| byte_serialize(word.as_bytes()).collect::<String>())
            .collect::<Vec<_>>()
            .join("+")
    };

    let mut url = format!(
        "{SEARCH_ENDPOINT}?_search={encoded_query}&page=1&resultsPerPage={limit}&dataType=product&facetsToRetrieve[]=browseVerticals"
    );
    for property in SEARCH_PROPERTIES {
        url.push_str("&propsToRetrieve[][]=");
        url.push_str(property);
    }
    url
}

/// Product detail URL including the market snapshot of every variant.
pub fn product_details_url(
    product_identifier: &str,
    currency: &str,
    locale: &str,
    vat_registered: bool,
) -> String {
    let identifier = byte_serialize(product_identifier.as_bytes()).collect::<String>();
    let currency = currency.to_uppercase();
    let locale = locale.to_uppercase();
    let market = if vat_registered {
        format!("{locale}{VAT_REGISTERED_SUFFIX}")
    } else {
        locale.clone()
    };

    format!(
        "{PRODUCTS_ENDPOINT}/{identifier}?includes=market&currency={currency}&country={locale}&market={market}"
    )
}
