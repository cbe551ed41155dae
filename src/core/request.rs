use crate::config::CarrierConfig;
use crate::domain::model::{
    Cart, CartItem, DestinationAddress, ItemDimensions, OriginAddress, ProductType, RateRequest,
    RequestItem,
};

/// Inclusive parcel weight limit in pounds. Heavier items ship as freight
/// handling units.
const PARCEL_WEIGHT_LIMIT_LBS: f64 = 70.0;
const OUNCES_PER_POUND: f64 = 16.0;

pub fn build_rate_request(cart: &Cart, config: &CarrierConfig) -> RateRequest {
    RateRequest {
        items: build_items(&cart.items),
        origin_address: OriginAddress {
            zip: config.origin_postcode.clone(),
        },
        destination_address: DestinationAddress {
            zip: cart.dest_postcode.clone(),
            is_residential: bool_str(cart.residential),
        },
        apply_rules: "true".to_string(),
    }
}

/// Flattens cart line items into gateway request items.
///
/// Configurable and bundle entries only contribute when a priced simple
/// sub-product is attached; its price and dimensions are used, the entry's
/// own weight is kept. Simple entries that belong to a parent are skipped
/// so a configurable selection is not counted twice. Missing dimensional
/// attributes degrade to 0.0 rather than failing.
pub fn build_items(items: &[CartItem]) -> Vec<RequestItem> {
    let mut out = Vec::new();

    for item in items {
        match item.product_type {
            ProductType::Simple => {
                if item.parent_item_id.is_some() {
                    continue;
                }
                out.push(request_item(item, item.price, item.dimensions));
            }
            ProductType::Configurable | ProductType::Bundle => {
                let Some(simple) = &item.simple_product else {
                    tracing::debug!(sku = %item.sku, "no simple sub-product attached, skipping");
                    continue;
                };
                out.push(request_item(item, simple.price, simple.dimensions));
            }
        }
    }

    out
}

fn request_item(item: &CartItem, value: f64, dimensions: Option<ItemDimensions>) -> RequestItem {
    let dims = dimensions.unwrap_or_default();
    let (item_type, weight, handling_unit_type) = classify(item.weight);

    RequestItem {
        product_sku: item.sku.clone(),
        quantity: item.qty,
        value,
        length: dims.length,
        width: dims.width,
        height: dims.height,
        weight,
        item_type: item_type.to_string(),
        handling_unit_type: handling_unit_type.to_string(),
    }
}

/// At or under 70 lbs an item ships as a parcel and its weight goes over
/// the wire in ounces; above that it ships as a boxed handling unit at its
/// pound weight.
fn classify(weight_lbs: f64) -> (&'static str, f64, &'static str) {
    if weight_lbs <= PARCEL_WEIGHT_LIMIT_LBS {
        ("parcel", weight_lbs * OUNCES_PER_POUND, "")
    } else {
        ("handling_unit", weight_lbs, "box")
    }
}

fn bool_str(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SimpleProduct;

    fn simple_item(sku: &str, weight: f64) -> CartItem {
        CartItem {
            sku: sku.to_string(),
            qty: 1,
            price: 19.99,
            weight,
            product_type: ProductType::Simple,
            parent_item_id: None,
            dimensions: Some(ItemDimensions {
                length: 10.0,
                width: 8.0,
                height: 4.0,
            }),
            simple_product: None,
        }
    }

    #[test]
    fn test_light_item_classified_as_parcel_in_ounces() {
        let items = build_items(&[simple_item("SKU-1", 50.0)]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_type, "parcel");
        assert_eq!(items[0].weight, 800.0);
        assert_eq!(items[0].handling_unit_type, "");
    }

    #[test]
    fn test_weight_threshold_is_inclusive() {
        let items = build_items(&[simple_item("SKU-1", 70.0)]);

        assert_eq!(items[0].item_type, "parcel");
        assert_eq!(items[0].weight, 1120.0);
        assert_eq!(items[0].handling_unit_type, "");
    }

    #[test]
    fn test_heavy_item_classified_as_handling_unit() {
        let items = build_items(&[simple_item("SKU-1", 71.0)]);

        assert_eq!(items[0].item_type, "handling_unit");
        assert_eq!(items[0].weight, 71.0);
        assert_eq!(items[0].handling_unit_type, "box");
    }

    #[test]
    fn test_configurable_parent_without_sub_product_is_skipped() {
        let parent = CartItem {
            sku: "CONF-1".to_string(),
            qty: 1,
            price: 0.0,
            weight: 5.0,
            product_type: ProductType::Configurable,
            parent_item_id: None,
            dimensions: None,
            simple_product: None,
        };

        assert!(build_items(&[parent]).is_empty());
    }

    #[test]
    fn test_configurable_entry_uses_sub_product_price_and_dimensions() {
        let parent = CartItem {
            sku: "CONF-1".to_string(),
            qty: 2,
            price: 0.0,
            weight: 3.0,
            product_type: ProductType::Configurable,
            parent_item_id: None,
            dimensions: None,
            simple_product: Some(SimpleProduct {
                price: 42.0,
                dimensions: Some(ItemDimensions {
                    length: 12.0,
                    width: 6.0,
                    height: 2.0,
                }),
            }),
        };

        let items = build_items(&[parent]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_sku, "CONF-1");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].value, 42.0);
        assert_eq!(items[0].length, 12.0);
        assert_eq!(items[0].weight, 48.0); // 3 lbs as ounces
    }

    #[test]
    fn test_bundle_sub_product_without_dimensions_degrades_to_zero() {
        let bundle = CartItem {
            sku: "KIT-1".to_string(),
            qty: 1,
            price: 0.0,
            weight: 80.0,
            product_type: ProductType::Bundle,
            parent_item_id: None,
            dimensions: None,
            simple_product: Some(SimpleProduct {
                price: 99.0,
                dimensions: None,
            }),
        };

        let items = build_items(&[bundle]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].length, 0.0);
        assert_eq!(items[0].width, 0.0);
        assert_eq!(items[0].height, 0.0);
        assert_eq!(items[0].item_type, "handling_unit");
    }

    #[test]
    fn test_simple_child_of_configurable_is_skipped() {
        let mut child = simple_item("CHILD-1", 5.0);
        child.parent_item_id = Some(7);

        assert!(build_items(&[child]).is_empty());
    }

    #[test]
    fn test_simple_item_without_dimensions_degrades_to_zero() {
        let mut item = simple_item("SKU-1", 10.0);
        item.dimensions = None;

        let items = build_items(&[item]);
        assert_eq!(items[0].length, 0.0);
        assert_eq!(items[0].height, 0.0);
    }

    #[test]
    fn test_request_wire_shape() {
        let cart = Cart {
            items: vec![simple_item("SKU-1", 50.0)],
            dest_postcode: "90210".to_string(),
            residential: true,
        };
        let config = CarrierConfig {
            active: true,
            title: "ShipHawk".to_string(),
            api_key: "key".to_string(),
            gateway_url: "https://api.example.com/".to_string(),
            origin_postcode: "94107".to_string(),
            timeout_seconds: 30,
        };

        let request = build_rate_request(&cart, &config);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["origin_address"]["zip"], "94107");
        assert_eq!(value["destination_address"]["zip"], "90210");
        assert_eq!(value["destination_address"]["is_residential"], "true");
        assert_eq!(value["apply_rules"], "true");
        assert_eq!(value["items"][0]["product_sku"], "SKU-1");
        assert_eq!(value["items"][0]["weight"], 800.0);
    }
}
