#![allow(dead_code)]

//! Landed-cost calculation over the rate catalog.
//!
//! Every function here is a pure transformation of its inputs; the one
//! exception is the jitter draw folded into logistics estimates, which is
//! injected through [`JitterSource`] so callers control the entropy.

use rand::Rng;
use thiserror::Error;

use super::catalog::RateCatalog;
use super::shipment::{CostBreakdown, ShipmentRequest, ShippingMode};

/// Fraction of declared value charged for air freight.
const AIR_FREIGHT_RATE: f64 = 0.12;
/// Fraction of declared value charged for sea freight.
const SEA_FREIGHT_RATE: f64 = 0.06;
/// Upper bound (exclusive) of the quote variance added to logistics cost.
pub const QUOTE_JITTER_SPAN: f64 = 100.0;

/// Hours of customs processing every shipment pays.
const BASE_CLEARANCE_HOURS: f64 = 24.0;
/// Extra clearance hours by mode; sea manifests queue far longer.
const AIR_CLEARANCE_HOURS: f64 = 24.0;
const SEA_CLEARANCE_HOURS: f64 = 72.0;
/// Declared value per additional clearance hour.
const VALUE_PER_CLEARANCE_HOUR: f64 = 5000.0;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("origin and destination countries cannot be the same")]
    SameCountry,
}

/// Source of the variance folded into shipping quotes.
pub trait JitterSource {
    /// Next variance amount, in destination currency units.
    fn sample(&mut self) -> f64;
}

/// Production source: uniform draw from `[0, span)` per quote, modeling
/// real-world spread between carrier quotes.
#[derive(Clone, Copy, Debug)]
pub struct UniformJitter {
    span: f64,
}

impl UniformJitter {
    pub fn new(span: f64) -> Self {
        Self { span }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new(QUOTE_JITTER_SPAN)
    }
}

impl JitterSource for UniformJitter {
    fn sample(&mut self) -> f64 {
        if self.span <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(0.0..self.span)
    }
}

/// Constant variance, for reproducible quotes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Effective ad-valorem duty fraction for one direction of trade.
///
/// Starts from the category's base rate (or the catalog fallback when the
/// category is unknown) and applies the `origin -> destination` agreement
/// multiplier when that exact directional entry exists. The reverse
/// direction is a different key and may resolve differently.
pub fn resolve_duty_rate(
    catalog: &RateCatalog,
    origin: &str,
    destination: &str,
    category: &str,
) -> f64 {
    let base_rate = catalog.base_duty_rate(category);
    match catalog.agreement_multiplier(origin, destination) {
        Some(multiplier) => base_rate * multiplier,
        None => base_rate,
    }
}

/// Freight plus insurance plus one quote-variance draw.
pub fn estimate_logistics_cost(
    value: f64,
    insurance: f64,
    mode: ShippingMode,
    jitter: &mut dyn JitterSource,
) -> f64 {
    let freight_rate = if mode.is_air() {
        AIR_FREIGHT_RATE
    } else {
        SEA_FREIGHT_RATE
    };
    value * freight_rate + insurance + jitter.sample()
}

/// Estimated customs clearance time, rounded to whole hours.
///
/// Grows with duty rate and declared value; air clears 48 hours faster than
/// sea for otherwise identical shipments.
pub fn estimate_clearance_hours(mode: ShippingMode, duty_rate: f64, value: f64) -> u32 {
    let mode_hours = if mode.is_air() {
        AIR_CLEARANCE_HOURS
    } else {
        SEA_CLEARANCE_HOURS
    };
    let hours =
        BASE_CLEARANCE_HOURS + mode_hours + duty_rate * 100.0 + value / VALUE_PER_CLEARANCE_HOUR;
    hours.round() as u32
}

/// Destination tax on the taxable base (declared value + logistics + duty).
pub fn compute_tax(taxable_base: f64, tax_rate: f64) -> f64 {
    taxable_base * tax_rate
}

/// Prices one shipment against the catalog.
///
/// The single hard failure is a same-country request, rejected before any
/// computation. Unknown categories and destinations degrade to the catalog
/// fallbacks instead of failing.
pub fn calculate(
    catalog: &RateCatalog,
    request: &ShipmentRequest,
    jitter: &mut dyn JitterSource,
) -> Result<CostBreakdown, QuoteError> {
    if request.origin == request.destination {
        return Err(QuoteError::SameCountry);
    }

    let duty_rate = resolve_duty_rate(
        catalog,
        &request.origin,
        &request.destination,
        &request.category,
    );
    let tax_rate = catalog.tax_rate(&request.destination);
    let currency = catalog.currency(&request.destination).to_string();

    let logistics_cost =
        estimate_logistics_cost(request.value, request.insurance, request.shipping_mode, jitter);
    let import_duty = request.value * duty_rate;
    let taxable_base = request.value + logistics_cost + import_duty;
    let tax = compute_tax(taxable_base, tax_rate);
    let total_landed_cost = request.value + logistics_cost + import_duty + tax;

    Ok(CostBreakdown {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        currency,
        shipment_value: request.value,
        total_landed_cost,
        import_duty,
        tax,
        logistics_cost,
        duty_rate,
        tax_rate,
        clearance_hours: estimate_clearance_hours(request.shipping_mode, duty_rate, request.value),
        has_fta: catalog.has_agreement(&request.origin, &request.destination),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::catalog::{Country, FALLBACK_DUTY_RATE};

    fn zero_jitter() -> FixedJitter {
        FixedJitter(0.0)
    }

    /// Catalog with a single one-way preference, for observing direction.
    fn one_way_catalog() -> RateCatalog {
        let countries = vec![
            Country {
                id: "norway".to_string(),
                name: "Norway".to_string(),
            },
            Country {
                id: "iceland".to_string(),
                name: "Iceland".to_string(),
            },
        ];
        let mut agreements = HashMap::new();
        agreements.insert("norway-iceland".to_string(), 0.25);
        RateCatalog::new(
            countries,
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
            agreements,
        )
    }

    #[test]
    fn unknown_category_resolves_to_fallback_rate() {
        let catalog = RateCatalog::standard();
        let rate = resolve_duty_rate(&catalog, "usa", "japan", "unknown-category");
        assert_eq!(rate, FALLBACK_DUTY_RATE);
    }

    #[test]
    fn agreement_multiplier_scales_the_base_rate() {
        let catalog = RateCatalog::standard();
        // electronics base 0.05, UK-Japan CEPA halves it
        let rate = resolve_duty_rate(&catalog, "uk", "japan", "electronics");
        assert_eq!(rate, 0.05 * 0.5);
        // duty-free under USMCA
        let rate = resolve_duty_rate(&catalog, "usa", "canada", "food");
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn reverse_direction_without_entry_keeps_base_rate() {
        let catalog = one_way_catalog();
        let forward = resolve_duty_rate(&catalog, "norway", "iceland", "widgets");
        let reverse = resolve_duty_rate(&catalog, "iceland", "norway", "widgets");
        assert_eq!(forward, FALLBACK_DUTY_RATE * 0.25);
        assert_eq!(reverse, FALLBACK_DUTY_RATE);
    }

    #[test]
    fn unknown_category_still_scaled_by_agreement() {
        let catalog = one_way_catalog();
        let request = ShipmentRequest::new(
            "norway",
            "iceland",
            "unlisted",
            1000.0,
            0.0,
            ShippingMode::Sea,
        );
        let breakdown = calculate(&catalog, &request, &mut zero_jitter()).unwrap();
        assert_eq!(breakdown.duty_rate, FALLBACK_DUTY_RATE * 0.25);
        assert!(breakdown.has_fta);
    }

    #[test]
    fn logistics_cost_by_mode() {
        let mut jitter = zero_jitter();
        assert_eq!(
            estimate_logistics_cost(10_000.0, 50.0, ShippingMode::Sea, &mut jitter),
            650.0
        );
        assert_eq!(
            estimate_logistics_cost(5_000.0, 0.0, ShippingMode::Air, &mut jitter),
            600.0
        );
    }

    #[test]
    fn uniform_jitter_stays_in_span() {
        let mut jitter = UniformJitter::default();
        for _ in 0..200 {
            let draw = jitter.sample();
            assert!((0.0..QUOTE_JITTER_SPAN).contains(&draw));
        }
    }

    #[test]
    fn clearance_air_is_48_hours_faster_than_sea() {
        // value/5000 and duty*100 land on integers, so rounding is exact
        let air = estimate_clearance_hours(ShippingMode::Air, 0.05, 5000.0);
        let sea = estimate_clearance_hours(ShippingMode::Sea, 0.05, 5000.0);
        assert_eq!(air, 54);
        assert_eq!(sea, 102);
        assert_eq!(sea - air, 48);
    }

    #[test]
    fn clearance_hours_monotone_in_value_and_duty() {
        let values = [0.0, 1_000.0, 10_000.0, 250_000.0];
        let rates = [0.0, 0.03, 0.08, 0.15];
        for mode in [ShippingMode::Air, ShippingMode::Sea] {
            for rate in rates {
                let mut previous = 0;
                for value in values {
                    let hours = estimate_clearance_hours(mode, rate, value);
                    assert!(hours >= previous);
                    previous = hours;
                }
            }
            for value in values {
                let mut previous = 0;
                for rate in rates {
                    let hours = estimate_clearance_hours(mode, rate, value);
                    assert!(hours >= previous);
                    previous = hours;
                }
            }
        }
    }

    #[test]
    fn total_is_exact_sum_of_components() {
        let catalog = RateCatalog::standard();
        let cases = [
            ("usa", "germany", "automotive", 12_345.0, 200.0, ShippingMode::Air),
            ("china", "brazil", "textiles", 999.5, 0.0, ShippingMode::Sea),
            ("india", "uk", "nonexistent", 0.0, 75.0, ShippingMode::Sea),
        ];
        for (origin, destination, category, value, insurance, mode) in cases {
            let request = ShipmentRequest::new(origin, destination, category, value, insurance, mode);
            let breakdown = calculate(&catalog, &request, &mut zero_jitter()).unwrap();
            assert_eq!(
                breakdown.total_landed_cost,
                breakdown.shipment_value
                    + breakdown.logistics_cost
                    + breakdown.import_duty
                    + breakdown.tax
            );
            assert!(breakdown.import_duty >= 0.0);
            assert!(breakdown.tax >= 0.0);
            assert!(breakdown.logistics_cost >= 0.0);
        }
    }

    #[test]
    fn usa_to_canada_electronics_by_sea() {
        let catalog = RateCatalog::standard();
        let request = ShipmentRequest::new(
            "usa",
            "canada",
            "electronics",
            10_000.0,
            50.0,
            ShippingMode::Sea,
        );
        let breakdown = calculate(&catalog, &request, &mut zero_jitter()).unwrap();

        assert_eq!(breakdown.duty_rate, 0.0);
        assert_eq!(breakdown.import_duty, 0.0);
        assert!(breakdown.has_fta);
        assert_eq!(breakdown.logistics_cost, 650.0);
        assert_eq!(breakdown.tax_rate, 0.05);
        assert_eq!(breakdown.tax, 532.5);
        assert_eq!(breakdown.total_landed_cost, 11_182.5);
        assert_eq!(breakdown.currency, "CAD");
    }

    #[test]
    fn usa_to_japan_unknown_category_by_air() {
        let catalog = RateCatalog::standard();
        let request = ShipmentRequest::new(
            "usa",
            "japan",
            "unknown-category",
            5_000.0,
            0.0,
            ShippingMode::Air,
        );
        let breakdown = calculate(&catalog, &request, &mut zero_jitter()).unwrap();

        assert_eq!(breakdown.duty_rate, 0.08);
        assert!(!breakdown.has_fta);
        assert_eq!(breakdown.import_duty, 400.0);
        assert_eq!(breakdown.logistics_cost, 600.0);
        assert_eq!(breakdown.tax_rate, 0.10);
        assert_eq!(breakdown.tax, 600.0);
        assert_eq!(breakdown.total_landed_cost, 6_600.0);
        assert_eq!(breakdown.currency, "JPY");
    }

    #[test]
    fn same_country_is_rejected_for_every_input_shape() {
        let catalog = RateCatalog::standard();
        for category in ["electronics", "food", "no-such-category"] {
            for value in [0.0, 500.0, 1_000_000.0] {
                for mode in [ShippingMode::Air, ShippingMode::Sea] {
                    let request =
                        ShipmentRequest::new("usa", "usa", category, value, 10.0, mode);
                    let result = calculate(&catalog, &request, &mut zero_jitter());
                    assert_eq!(result, Err(QuoteError::SameCountry));
                }
            }
        }
    }
}
