mod common;

use common::fixture;
use stockx_client::{decode_product_response, decode_search_response, SearchResultProduct};

#[test]
fn search_fixture_maps_every_field() {
    let products = decode_search_response(fixture("search.json").as_bytes()).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(
        products[0],
        SearchResultProduct {
            brand: "adidas".into(),
            colorway: "Onyx/Onyx/Onyx".into(),
            image_url: "https://images.stockx.com/images/adidas-Yeezy-Foam-RNNR-Onyx-Product.jpg?fit=fill&w=140&h=100".into(),
            category: "sneakers".into(),
            description: "HP8739".into(),
            title: "adidas Yeezy Foam RNNR Onyx".into(),
            product_identifier: "adidas-yeezy-foam-rnnr-onyx".into(),
        }
    );
    assert_eq!(products[1].product_identifier, "adidas-yeezy-foam-rnnr-mineral-blue");
}

#[test]
fn empty_search_fixture_has_no_products() {
    let products = decode_search_response(fixture("search_empty.json").as_bytes()).unwrap();
    assert!(products.is_empty());
}

#[test]
fn product_fixture_maps_product_fields() {
    let details = decode_product_response(fixture("product.json").as_bytes()).unwrap();

    assert!(!details.is_empty());
    assert_eq!(details.id, "0b5a3e0e-9b7e-4f5a-8f0e-2c1b7f3f6d41");
    assert_eq!(details.product_identifier, "adidas-yeezy-foam-rnnr-onyx");
    assert_eq!(details.brand, "adidas");
    assert_eq!(details.name, "Onyx");
    assert_eq!(details.style_id, "HP8739");
    assert_eq!(details.shoe, "adidas Yeezy Foam RNNR");
    assert_eq!(details.size_locale, "eu");
    assert_eq!(details.size_title, "EU");
    assert_eq!(details.release_date, "2022-06-08 23:59:59");
    assert_eq!(details.minimum_bid, 25);
    assert_eq!(details.retail_price, 90);
    assert!(details.small_image_url.ends_with("?w=300"));
    assert!(details.thumb_url.ends_with("?w=140"));
    assert_eq!(details.lowest_ask, 96);
    assert_eq!(details.lowest_ask_float, 96.0);
    assert_eq!(details.highest_bid, 105);
    assert_eq!(details.highest_bid_float, 105.0);
}

#[test]
fn product_fixture_keeps_traded_sizes_only() {
    let details = decode_product_response(fixture("product.json").as_bytes()).unwrap();

    let uuids = details
        .variants
        .iter()
        .map(|variant| variant.uuid.as_str())
        .collect::<Vec<_>>();
    assert_eq!(uuids.len(), 4);
    assert!(!uuids.contains(&"4d5e2c1a-0002-4c1e-9d3b-aa11bb22cc02"));
}

#[test]
fn product_fixture_fractional_size_pins_encounter_order() {
    // "39 1/3" is not a number, so no neighbour is ever moved across it
    let details = decode_product_response(fixture("product.json").as_bytes()).unwrap();

    let sizes = details
        .variants
        .iter()
        .map(|variant| variant.size.as_str())
        .collect::<Vec<_>>();
    assert_eq!(sizes, ["44", "39 1/3", "42", "43.5"]);
}

#[test]
fn product_fixture_tolerates_drifted_types() {
    let details = decode_product_response(fixture("product.json").as_bytes()).unwrap();

    let variant = details
        .variants
        .iter()
        .find(|variant| variant.size == "43.5")
        .unwrap();
    assert_eq!(variant.lowest_ask, 112);
    assert_eq!(variant.highest_bid_float, 0.0);
    assert_eq!(variant.sales_last_72_hours, 9);
    assert_eq!(
        variant.last_sale_date.map(|date| date.to_rfc3339()).as_deref(),
        Some("2022-07-19T21:55:40+00:00")
    );
}

#[test]
fn numeric_sizes_fixture_is_sorted() {
    let details = decode_product_response(fixture("product_sizes.json").as_bytes()).unwrap();

    let sizes = details
        .variants
        .iter()
        .map(|variant| variant.size.as_str())
        .collect::<Vec<_>>();
    assert_eq!(sizes, ["9", "9.5", "10"]);
}

#[cfg(feature = "serde_io")]
#[test]
fn normalized_model_serializes_camel_case() {
    let details = decode_product_response(fixture("product_sizes.json").as_bytes()).unwrap();
    let value = serde_json::to_value(&details).unwrap();

    assert_eq!(value["productIdentifier"], "nike-dunk-low-retro-white-black-2021");
    assert_eq!(value["variants"][0]["size"], "9");
    assert_eq!(value["variants"][0]["salesLast72Hours"], 0);
    assert!(value["variants"][0]["lastSaleDate"].is_null());
}
