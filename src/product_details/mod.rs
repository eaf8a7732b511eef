mod ordering;
mod product;
mod response;
mod variant;

pub use ordering::{sort_variants, NumericSizeOrder, SizeOrder};
pub use product::{decode_product_response, decode_product_response_with, ProductDetails};
pub use variant::ProductDetailsVariant;
