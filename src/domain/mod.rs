//! Domain logic for landed-cost estimation lives here.

pub mod app_state;
pub mod catalog;
pub mod engine;
pub mod insights;
pub mod shipment;

pub use app_state::{AppState, Language, PersistedState, ShipmentDefaults};
pub use catalog::{Country, CountryId, RateCatalog, SHIPMENT_CATEGORIES};
pub use engine::{
    calculate, compute_tax, estimate_clearance_hours, estimate_logistics_cost, resolve_duty_rate,
    FixedJitter, JitterSource, QuoteError, UniformJitter,
};
pub use insights::{merge_headlines, strip_tags, Article, FeedStatus};
pub use shipment::{CostBreakdown, ShipmentRequest, ShippingMode};
