//! Static rate tables the cost engine reads from.

use std::{collections::HashMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

/// Identifier for countries in the catalog (lowercase slug, e.g. `"usa"`).
pub type CountryId = String;

/// Currency assumed when a destination has no entry in the currency table.
pub const FALLBACK_CURRENCY: &str = "USD";
/// VAT/GST fraction assumed for destinations missing from the tax table.
pub const FALLBACK_TAX_RATE: f64 = 0.15;
/// Ad-valorem duty fraction for categories missing from the duty table.
pub const FALLBACK_DUTY_RATE: f64 = 0.08;

/// Entry in the static country registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

const COUNTRY_ROWS: &[(&str, &str)] = &[
    ("usa", "USA"),
    ("china", "China"),
    ("japan", "Japan"),
    ("germany", "Germany"),
    ("uk", "UK"),
    ("france", "France"),
    ("india", "India"),
    ("italy", "Italy"),
    ("brazil", "Brazil"),
    ("canada", "Canada"),
];

const CURRENCY_ROWS: &[(&str, &str)] = &[
    ("usa", "USD"),
    ("china", "CNY"),
    ("japan", "JPY"),
    ("germany", "EUR"),
    ("uk", "GBP"),
    ("france", "EUR"),
    ("india", "INR"),
    ("italy", "EUR"),
    ("brazil", "BRL"),
    ("canada", "CAD"),
];

const TAX_ROWS: &[(&str, f64)] = &[
    ("usa", 0.10),
    ("china", 0.13),
    ("japan", 0.10),
    ("germany", 0.19),
    ("uk", 0.20),
    ("france", 0.20),
    ("india", 0.18),
    ("italy", 0.22),
    ("brazil", 0.25),
    ("canada", 0.05),
];

const DUTY_ROWS: &[(&str, f64)] = &[
    ("electronics", 0.05),
    ("machinery", 0.07),
    ("automotive", 0.10),
    ("pharmaceuticals", 0.03),
    ("textiles", 0.12),
    ("food", 0.15),
];

// Multiplier applied to the base duty rate. 0 = duty-free, 0.5 = half duty.
// Directions are independent entries; both are listed where the agreement
// covers both.
const AGREEMENT_ROWS: &[(&str, &str, f64)] = &[
    // USMCA
    ("canada", "usa", 0.0),
    ("usa", "canada", 0.0),
    // EU internal market
    ("germany", "france", 0.0),
    ("germany", "italy", 0.0),
    ("france", "germany", 0.0),
    ("france", "italy", 0.0),
    ("italy", "france", 0.0),
    ("italy", "germany", 0.0),
    // UK-Japan CEPA
    ("uk", "japan", 0.5),
    ("japan", "uk", 0.5),
];

/// Category choices offered by the calculator form, in display order.
/// Requests may still carry any other string; those fall back to
/// [`FALLBACK_DUTY_RATE`].
pub const SHIPMENT_CATEGORIES: &[(&str, &str)] = &[
    ("electronics", "Electronics"),
    ("machinery", "Machinery"),
    ("automotive", "Automotive"),
    ("pharmaceuticals", "Pharmaceuticals"),
    ("textiles", "Textiles"),
    ("food", "Food & Beverage"),
];

/// Immutable rate configuration: country registry, per-destination currency
/// and tax tables, per-category duty rates, and the directional
/// trade-agreement multipliers.
///
/// Built once and shared read-only; every lookup has a documented fallback,
/// so no lookup can fail.
#[derive(Clone, Debug, Default)]
pub struct RateCatalog {
    countries: Vec<Country>,
    currencies: HashMap<CountryId, String>,
    tax_rates: HashMap<CountryId, f64>,
    duty_rates: HashMap<String, f64>,
    trade_agreements: HashMap<String, f64>,
}

fn agreement_key(origin: &str, destination: &str) -> String {
    format!("{origin}-{destination}")
}

impl RateCatalog {
    pub fn new(
        countries: Vec<Country>,
        currencies: HashMap<CountryId, String>,
        tax_rates: HashMap<CountryId, f64>,
        duty_rates: HashMap<String, f64>,
        trade_agreements: HashMap<String, f64>,
    ) -> Self {
        Self {
            countries,
            currencies,
            tax_rates,
            duty_rates,
            trade_agreements,
        }
    }

    /// The built-in dataset covering the ten largest economies.
    pub fn standard() -> Self {
        Self::new(
            COUNTRY_ROWS
                .iter()
                .map(|(id, name)| Country {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
            CURRENCY_ROWS
                .iter()
                .map(|(id, code)| ((*id).to_string(), (*code).to_string()))
                .collect(),
            TAX_ROWS
                .iter()
                .map(|(id, rate)| ((*id).to_string(), *rate))
                .collect(),
            DUTY_ROWS
                .iter()
                .map(|(category, rate)| ((*category).to_string(), *rate))
                .collect(),
            AGREEMENT_ROWS
                .iter()
                .map(|(origin, destination, multiplier)| {
                    (agreement_key(origin, destination), *multiplier)
                })
                .collect(),
        )
    }

    /// Shared process-wide instance of the built-in dataset.
    pub fn global() -> &'static RateCatalog {
        static CATALOG: OnceLock<RateCatalog> = OnceLock::new();
        CATALOG.get_or_init(RateCatalog::standard)
    }

    /// Registry entries in declared order (drives the form dropdowns).
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_name(&self, id: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|country| country.id == id)
            .map(|country| country.name.as_str())
    }

    /// ISO currency code used at the destination.
    pub fn currency(&self, destination: &str) -> &str {
        self.currencies
            .get(destination)
            .map(String::as_str)
            .unwrap_or(FALLBACK_CURRENCY)
    }

    /// VAT/GST fraction charged by the destination.
    pub fn tax_rate(&self, destination: &str) -> f64 {
        self.tax_rates
            .get(destination)
            .copied()
            .unwrap_or(FALLBACK_TAX_RATE)
    }

    /// Base ad-valorem duty fraction for a goods category.
    pub fn base_duty_rate(&self, category: &str) -> f64 {
        self.duty_rates
            .get(category)
            .copied()
            .unwrap_or(FALLBACK_DUTY_RATE)
    }

    /// Multiplier for the exact `origin -> destination` direction, if an
    /// agreement entry exists. The reverse direction is a different key.
    pub fn agreement_multiplier(&self, origin: &str, destination: &str) -> Option<f64> {
        self.trade_agreements
            .get(&agreement_key(origin, destination))
            .copied()
    }

    pub fn has_agreement(&self, origin: &str, destination: &str) -> bool {
        self.trade_agreements
            .contains_key(&agreement_key(origin, destination))
    }

    /// Destinations with a preferential entry for goods leaving `origin`,
    /// as `(destination id, multiplier)` in registry order.
    pub fn outbound_partners(&self, origin: &str) -> Vec<(CountryId, f64)> {
        self.countries
            .iter()
            .filter_map(|country| {
                self.agreement_multiplier(origin, &country.id)
                    .map(|multiplier| (country.id.clone(), multiplier))
            })
            .collect()
    }

    /// Origins with a preferential entry for goods arriving at
    /// `destination`, as `(origin id, multiplier)` in registry order.
    pub fn inbound_partners(&self, destination: &str) -> Vec<(CountryId, f64)> {
        self.countries
            .iter()
            .filter_map(|country| {
                self.agreement_multiplier(&country.id, destination)
                    .map(|multiplier| (country.id.clone(), multiplier))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_ten_countries_in_declared_order() {
        let catalog = RateCatalog::standard();
        let ids: Vec<&str> = catalog.countries().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "usa", "china", "japan", "germany", "uk", "france", "india", "italy", "brazil",
                "canada"
            ]
        );
    }

    #[test]
    fn known_destination_lookups() {
        let catalog = RateCatalog::standard();
        assert_eq!(catalog.currency("japan"), "JPY");
        assert_eq!(catalog.tax_rate("canada"), 0.05);
        assert_eq!(catalog.base_duty_rate("pharmaceuticals"), 0.03);
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        let catalog = RateCatalog::standard();
        assert_eq!(catalog.currency("atlantis"), FALLBACK_CURRENCY);
        assert_eq!(catalog.tax_rate("atlantis"), FALLBACK_TAX_RATE);
        assert_eq!(catalog.base_duty_rate("antiques"), FALLBACK_DUTY_RATE);
    }

    #[test]
    fn agreement_lookup_is_directional() {
        let catalog = RateCatalog::standard();
        assert_eq!(catalog.agreement_multiplier("uk", "japan"), Some(0.5));
        assert_eq!(catalog.agreement_multiplier("japan", "uk"), Some(0.5));
        assert_eq!(catalog.agreement_multiplier("usa", "japan"), None);
        assert!(!catalog.has_agreement("usa", "germany"));
    }

    #[test]
    fn partner_lists_follow_registry_order() {
        let catalog = RateCatalog::standard();
        let outbound = catalog.outbound_partners("germany");
        assert_eq!(
            outbound,
            vec![("france".to_string(), 0.0), ("italy".to_string(), 0.0)]
        );
        let inbound = catalog.inbound_partners("usa");
        assert_eq!(inbound, vec![("canada".to_string(), 0.0)]);
    }
}
