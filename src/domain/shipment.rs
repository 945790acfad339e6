//! Value objects passed into and out of the cost engine.

use serde::{Deserialize, Serialize};

use super::catalog::CountryId;

/// How the shipment travels. Anything the form (or a caller) supplies that
/// is not exactly `"air"` is treated as sea freight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMode {
    Air,
    #[default]
    Sea,
}

impl ShippingMode {
    pub fn from_key(key: &str) -> Self {
        if key == "air" {
            ShippingMode::Air
        } else {
            ShippingMode::Sea
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ShippingMode::Air => "air",
            ShippingMode::Sea => "sea",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShippingMode::Air => "Air Freight",
            ShippingMode::Sea => "Sea Freight",
        }
    }

    pub fn is_air(&self) -> bool {
        matches!(self, ShippingMode::Air)
    }
}

/// One shipment to price. Built per call, never stored.
///
/// Monetary inputs are sanitized on construction: non-finite or negative
/// amounts become 0 rather than failing the request.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRequest {
    pub origin: CountryId,
    pub destination: CountryId,
    pub category: String,
    pub value: f64,
    pub insurance: f64,
    pub shipping_mode: ShippingMode,
}

impl ShipmentRequest {
    pub fn new(
        origin: impl Into<CountryId>,
        destination: impl Into<CountryId>,
        category: impl Into<String>,
        value: f64,
        insurance: f64,
        shipping_mode: ShippingMode,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            category: category.into(),
            value: sanitize_amount(value),
            insurance: sanitize_amount(insurance),
            shipping_mode,
        }
    }
}

fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Full cost picture for one shipment, in the destination's currency.
/// Rates are fractions; `clearance_hours` is the only rounded field.
#[derive(Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub origin: CountryId,
    pub destination: CountryId,
    pub currency: String,
    pub shipment_value: f64,
    pub total_landed_cost: f64,
    pub import_duty: f64,
    pub tax: f64,
    pub logistics_cost: f64,
    pub duty_rate: f64,
    pub tax_rate: f64,
    pub clearance_hours: u32,
    pub has_fta: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing_treats_everything_but_air_as_sea() {
        assert_eq!(ShippingMode::from_key("air"), ShippingMode::Air);
        assert_eq!(ShippingMode::from_key("sea"), ShippingMode::Sea);
        assert_eq!(ShippingMode::from_key("rail"), ShippingMode::Sea);
        assert_eq!(ShippingMode::from_key(""), ShippingMode::Sea);
        assert_eq!(ShippingMode::from_key("AIR"), ShippingMode::Sea);
    }

    #[test]
    fn request_sanitizes_invalid_amounts_to_zero() {
        let request = ShipmentRequest::new(
            "usa",
            "germany",
            "electronics",
            -250.0,
            f64::NAN,
            ShippingMode::Sea,
        );
        assert_eq!(request.value, 0.0);
        assert_eq!(request.insurance, 0.0);

        let request =
            ShipmentRequest::new("usa", "germany", "electronics", 10_000.0, 50.0, ShippingMode::Air);
        assert_eq!(request.value, 10_000.0);
        assert_eq!(request.insurance, 50.0);
    }

    #[test]
    fn infinite_value_is_coerced_to_zero() {
        let request = ShipmentRequest::new(
            "usa",
            "japan",
            "food",
            f64::INFINITY,
            0.0,
            ShippingMode::Sea,
        );
        assert_eq!(request.value, 0.0);
    }
}
