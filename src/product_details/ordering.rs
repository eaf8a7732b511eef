//! Ordering of size variants.

use crate::product_details::ProductDetailsVariant;

/// Strict "less than" between two variant sizes.
///
/// Implementations do not need to be a total order. [`sort_variants`] only
/// moves an element in front of another when `less` says so.
pub trait SizeOrder {
    fn less(&self, a: &str, b: &str) -> bool;
}

/// Compares sizes as numbers.
///
/// If either size is not a number the pair is reported as "not less", so
/// sizes like `"W 7"` or `"XL"` keep the position they were encountered in
/// relative to their neighbours. This is not a total order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericSizeOrder;

impl SizeOrder for NumericSizeOrder {
    fn less(&self, a: &str, b: &str) -> bool {
        match (a.parse::<f32>(), b.parse::<f32>()) {
            (Ok(a), Ok(b)) => a < b,
            _ => false,
        }
    }
}

/// Stable insertion sort of `variants` by size.
///
/// Driven only by `order.less`, so a comparator that is not a total order
/// can never make it panic.
pub fn sort_variants<O>(variants: &mut [ProductDetailsVariant], order: &O)
where
    O: SizeOrder + ?Sized,
{
    for i in 1..variants.len() {
        let mut j = i;
        while j > 0 && order.less(&variants[j].size, &variants[j - 1].size) {
            variants.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(sizes: &[&str]) -> Vec<ProductDetailsVariant> {
        sizes
            .iter()
            .map(|size| ProductDetailsVariant {
                size: size.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn sizes(variants: &[ProductDetailsVariant]) -> Vec<&str> {
        variants.iter().map(|v| v.size.as_str()).collect()
    }

    #[test]
    fn test_numeric_sizes_ascending() {
        let mut v = variants(&["10", "9", "9.5"]);
        sort_variants(&mut v, &NumericSizeOrder);
        assert_eq!(sizes(&v), ["9", "9.5", "10"]);
    }

    #[test]
    fn test_many_numeric_sizes() {
        let mut v = variants(&["12", "4", "7.5", "13", "3.5", "8", "11.5", "6", "10", "5.5", "9", "14", "4.5"]);
        sort_variants(&mut v, &NumericSizeOrder);
        assert_eq!(
            sizes(&v),
            ["3.5", "4", "4.5", "5.5", "6", "7.5", "8", "9", "10", "11.5", "12", "13", "14"]
        );
    }

    #[test]
    fn test_equal_sizes_keep_encounter_order() {
        let mut v = variants(&["10", "9", "9.0"]);
        v[1].uuid = "first".into();
        v[2].uuid = "second".into();
        sort_variants(&mut v, &NumericSizeOrder);
        assert_eq!(v[0].uuid, "first");
        assert_eq!(v[1].uuid, "second");
    }

    #[test]
    fn test_unparseable_size_blocks_movement() {
        // nothing moves past "W 7"
        let mut v = variants(&["10", "W 7", "9"]);
        sort_variants(&mut v, &NumericSizeOrder);
        assert_eq!(sizes(&v), ["10", "W 7", "9"]);

        let mut v = variants(&["W 7", "10", "9"]);
        sort_variants(&mut v, &NumericSizeOrder);
        assert_eq!(sizes(&v), ["W 7", "9", "10"]);
    }

    #[test]
    fn test_custom_order() {
        struct Descending;
        impl SizeOrder for Descending {
            fn less(&self, a: &str, b: &str) -> bool {
                NumericSizeOrder.less(b, a)
            }
        }

        let mut v = variants(&["9", "10", "9.5"]);
        sort_variants(&mut v, &Descending);
        assert_eq!(sizes(&v), ["10", "9.5", "9"]);
    }
}
