#![allow(dead_code)]

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::catalog::CountryId;
use super::insights::{Article, FeedStatus};
use super::shipment::ShippingMode;

/// Display language for the app chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italiano",
        }
    }
}

/// Initial values for the calculator form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDefaults {
    pub origin: CountryId,
    pub destination: CountryId,
    pub category: String,
    pub shipping_mode: ShippingMode,
}

impl Default for ShipmentDefaults {
    fn default() -> Self {
        Self {
            origin: "usa".to_string(),
            destination: "germany".to_string(),
            category: "electronics".to_string(),
            shipping_mode: ShippingMode::Sea,
        }
    }
}

/// Session state shared through the component tree.
#[derive(Clone, Debug)]
pub struct AppState {
    pub language: Language,
    pub defaults: ShipmentDefaults,
    pub news_enabled: bool,
    pub articles: Vec<Article>,
    pub feed_status: FeedStatus,
    pub last_feed_fetch: Option<SystemTime>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            defaults: ShipmentDefaults::default(),
            news_enabled: true,
            articles: Vec::new(),
            feed_status: FeedStatus::default(),
            last_feed_fetch: None,
        }
    }
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.language = persisted.language;
        self.defaults = persisted.defaults;
        self.news_enabled = persisted.news_enabled;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            language: self.language,
            defaults: self.defaults.clone(),
            news_enabled: self.news_enabled,
        }
    }
}

/// The slice of state that survives restarts. Calculations never do.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub defaults: ShipmentDefaults,
    #[serde(default = "default_news_enabled")]
    pub news_enabled: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            defaults: ShipmentDefaults::default(),
            news_enabled: true,
        }
    }
}

fn default_news_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_round_trip_preserves_preferences() {
        let mut state = AppState::default();
        state.language = Language::Italian;
        state.defaults.origin = "italy".to_string();
        state.defaults.shipping_mode = ShippingMode::Air;
        state.news_enabled = false;

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());

        assert_eq!(restored.language, Language::Italian);
        assert_eq!(restored.defaults.origin, "italy");
        assert_eq!(restored.defaults.shipping_mode, ShippingMode::Air);
        assert!(!restored.news_enabled);
    }

    #[test]
    fn persisted_state_tolerates_missing_fields() {
        let parsed: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.language, Language::English);
        assert!(parsed.news_enabled);
        assert_eq!(parsed.defaults.origin, "usa");
        assert_eq!(parsed.defaults.destination, "germany");
    }
}
