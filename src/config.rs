//! Application-level configuration constants and mount-time overrides.

use crate::widget::PriceBounds;
use crate::WidgetError;
use serde::Deserialize;

// Slider range
pub const ABS_MIN_PRICE: f64 = 900.0;
pub const ABS_MAX_PRICE: f64 = 75_000.0;

// Formatting
pub const CURRENCY_LABEL: &str = "PKR";
pub const FILL_PROPERTY: &str = "--value-percent";

// Element ids supplied by the listing page markup
pub const MIN_DISPLAY_ID: &str = "min-price-display";
pub const MAX_DISPLAY_ID: &str = "max-price-display";
pub const SLIDER_ID: &str = "max-price-slider";
pub const MIN_HIDDEN_ID: &str = "min-price-hidden";
pub const MAX_HIDDEN_ID: &str = "max-price-hidden";

// Events
pub const SLIDER_EVENT: &str = "input";
pub const READY_EVENT: &str = "DOMContentLoaded";

/// Options accepted by `mountPriceSlider`. Every field is optional on the JS
/// side; anything missing falls back to the constants above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub min_display_id: String,
    pub max_display_id: String,
    pub slider_id: String,
    pub min_hidden_id: String,
    pub max_hidden_id: String,
    pub abs_min_price: f64,
    pub abs_max_price: f64,
    pub currency_label: String,
    pub fill_property: String,
    /// Write `abs_min_price` into the hidden minimum field when binding.
    pub seed_min_price: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_display_id: MIN_DISPLAY_ID.to_string(),
            max_display_id: MAX_DISPLAY_ID.to_string(),
            slider_id: SLIDER_ID.to_string(),
            min_hidden_id: MIN_HIDDEN_ID.to_string(),
            max_hidden_id: MAX_HIDDEN_ID.to_string(),
            abs_min_price: ABS_MIN_PRICE,
            abs_max_price: ABS_MAX_PRICE,
            currency_label: CURRENCY_LABEL.to_string(),
            fill_property: FILL_PROPERTY.to_string(),
            seed_min_price: true,
        }
    }
}

impl WidgetConfig {
    pub fn bounds(&self) -> PriceBounds {
        PriceBounds::new(self.abs_min_price, self.abs_max_price)
    }

    /// Reject configurations the widget cannot render sensibly.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if !self.abs_min_price.is_finite() || !self.abs_max_price.is_finite() {
            return Err(WidgetError::InvalidConfig(
                "price bounds must be finite".to_string(),
            ));
        }
        if self.abs_max_price <= self.abs_min_price {
            return Err(WidgetError::InvalidConfig(format!(
                "absMaxPrice ({}) must be greater than absMinPrice ({})",
                self.abs_max_price, self.abs_min_price
            )));
        }

        let ids = [
            ("minDisplayId", &self.min_display_id),
            ("maxDisplayId", &self.max_display_id),
            ("sliderId", &self.slider_id),
            ("minHiddenId", &self.min_hidden_id),
            ("maxHiddenId", &self.max_hidden_id),
        ];
        if let Some((name, _)) = ids.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(WidgetError::InvalidConfig(format!("{} cannot be empty", name)));
        }
        if self.fill_property.trim().is_empty() {
            return Err(WidgetError::InvalidConfig(
                "fillProperty cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
