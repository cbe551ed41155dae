use crate::utils::error::RateError;
use serde::{Deserialize, Serialize};

/// Product types as the host platform reports them on cart line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Configurable,
    Bundle,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ItemDimensions {
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// The simple sub-product attached to a configurable or bundle cart entry.
/// It carries the price and the dimensional attributes that the parent
/// entry itself lacks.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleProduct {
    pub price: f64,
    #[serde(default)]
    pub dimensions: Option<ItemDimensions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    pub sku: String,
    pub qty: u32,
    #[serde(default)]
    pub price: f64,
    /// Weight in pounds.
    #[serde(default)]
    pub weight: f64,
    pub product_type: ProductType,
    #[serde(default)]
    pub parent_item_id: Option<u64>,
    #[serde(default)]
    pub dimensions: Option<ItemDimensions>,
    #[serde(default)]
    pub simple_product: Option<SimpleProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub dest_postcode: String,
    #[serde(default = "default_residential")]
    pub residential: bool,
}

// The source integration always quoted residential destinations.
fn default_residential() -> bool {
    true
}

// --- Wire types for the rate gateway ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub product_sku: String,
    pub quantity: u32,
    pub value: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub item_type: String,
    pub handling_unit_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginAddress {
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationAddress {
    pub zip: String,
    /// The gateway expects a string, not a JSON boolean.
    pub is_residential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRequest {
    pub items: Vec<RequestItem>,
    pub origin_address: OriginAddress,
    pub destination_address: DestinationAddress,
    pub apply_rules: String,
}

/// Gateway response, parsed forgivingly: either field may be absent and a
/// missing field is never a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub rates: Option<Vec<RateRow>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateRow {
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub price: f64,
}

/// One shipping option handed back to the host platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingMethod {
    pub carrier: String,
    pub carrier_title: String,
    pub method: String,
    pub method_title: String,
    pub price: f64,
    pub cost: f64,
}

/// Outcome of a rate collection. "No rates" is a valid, non-fatal result;
/// only the caller decides whether `Empty` or `Failed` is worth logging.
#[derive(Debug)]
pub enum RateOutcome {
    /// Carrier disabled in configuration; no gateway call was made.
    NotApplicable,
    Methods(Vec<ShippingMethod>),
    /// The gateway answered with an error field instead of rates.
    Empty { reason: String },
    /// Transport or parse failure.
    Failed(RateError),
}

impl RateOutcome {
    /// Collapses every non-success outcome into an empty method list.
    pub fn into_methods(self) -> Vec<ShippingMethod> {
        match self {
            RateOutcome::Methods(methods) => methods,
            _ => Vec::new(),
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, RateOutcome::NotApplicable)
    }
}
