//! The price range widget: keeps the max-price slider, the visible price
//! labels and the hidden form fields consistent with each other.

use crate::config::{WidgetConfig, ABS_MAX_PRICE, ABS_MIN_PRICE};
use crate::currency::format_currency_with;
use crate::utils::{number_to_string, parse_int};
use log::{debug, warn};

/// Read/write access to the five elements the widget drives.
///
/// Values cross this boundary as strings, exactly as form fields hold them.
pub trait PriceRangeView {
    fn min_hidden_value(&self) -> String;
    fn set_min_hidden_value(&self, value: &str);
    fn slider_value(&self) -> String;
    fn set_slider_value(&self, value: &str);
    fn set_min_display(&self, text: &str);
    fn set_max_display(&self, text: &str);
    fn set_max_hidden_value(&self, value: &str);
    /// Set the slider's fill custom property, e.g. `"42.5%"`.
    fn set_fill_percent(&self, value: &str);
}

/// Absolute range addressable by the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub abs_min: f64,
    pub abs_max: f64,
}

impl PriceBounds {
    pub fn new(abs_min: f64, abs_max: f64) -> Self {
        Self { abs_min, abs_max }
    }

    /// Position of `price` along the track, 0 at `abs_min` and 100 at `abs_max`.
    /// Not clamped; out-of-range prices give values outside 0..=100.
    #[inline]
    pub fn fill_percent(&self, price: f64) -> f64 {
        (price - self.abs_min) / (self.abs_max - self.abs_min) * 100.0
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::new(ABS_MIN_PRICE, ABS_MAX_PRICE)
    }
}

/// Everything written to the page by one max-price update.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxPriceUpdate {
    pub effective_max: f64,
    /// Set when the candidate was below the minimum; the slider is moved to this value.
    pub slider_reset: Option<String>,
    pub display: String,
    pub hidden: String,
    pub fill: String,
}

/// Pure part of the update: clamp the candidate against `min_price` and
/// derive the strings to write. `NaN` on either side never clamps.
pub fn compute_max_update(
    candidate: f64,
    min_price: f64,
    bounds: &PriceBounds,
    currency_label: &str,
) -> MaxPriceUpdate {
    let (effective_max, slider_reset) = if candidate < min_price {
        (min_price, Some(number_to_string(min_price)))
    } else {
        (candidate, None)
    };

    MaxPriceUpdate {
        effective_max,
        slider_reset,
        display: format_currency_with(currency_label, &effective_max),
        hidden: number_to_string(effective_max),
        fill: format!("{}%", number_to_string(bounds.fill_percent(effective_max))),
    }
}

pub struct PriceRangeWidget<V> {
    view: V,
    bounds: PriceBounds,
    currency_label: String,
}

impl<V: PriceRangeView> PriceRangeWidget<V> {
    pub fn new(view: V, bounds: PriceBounds, currency_label: impl Into<String>) -> Self {
        Self {
            view,
            bounds,
            currency_label: currency_label.into(),
        }
    }

    pub fn from_config(view: V, config: &WidgetConfig) -> Self {
        Self::new(view, config.bounds(), config.currency_label.clone())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Write the absolute minimum into the hidden minimum field.
    pub fn seed_min_price(&self) {
        self.view
            .set_min_hidden_value(&number_to_string(self.bounds.abs_min));
    }

    /// Page-ready initialization: show the minimum, then run the regular
    /// update with whatever position the slider starts at.
    pub fn initialize(&self) -> MaxPriceUpdate {
        let min_raw = self.view.min_hidden_value();
        self.view
            .set_min_display(&format_currency_with(&self.currency_label, min_raw.as_str()));

        let start = self.view.slider_value();
        self.update_max_price(&start)
    }

    /// Apply a new candidate maximum (the slider's value) to the page.
    pub fn update_max_price(&self, candidate: &str) -> MaxPriceUpdate {
        let min_raw = self.view.min_hidden_value();
        let max_price = parse_int(candidate);
        let min_price = parse_int(&min_raw);
        if max_price.is_nan() || min_price.is_nan() {
            warn!(
                "Non-numeric price input (max: {:?}, min field: {:?})",
                candidate, min_raw
            );
        }

        let update = compute_max_update(max_price, min_price, &self.bounds, &self.currency_label);

        if let Some(reset) = &update.slider_reset {
            debug!("Max price {} below min {}, clamping slider", max_price, min_price);
            self.view.set_slider_value(reset);
        }
        self.view.set_max_display(&update.display);
        self.view.set_max_hidden_value(&update.hidden);
        self.view.set_fill_percent(&update.fill);

        update
    }
}
