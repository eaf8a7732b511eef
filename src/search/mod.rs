mod response;
#[allow(clippy::module_inception)]
mod search;

pub use search::{decode_search_response, SearchResultProduct};
