use log::{info, warn};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod currency;
pub mod dom;
pub mod logging;
pub mod utils;
pub mod widget;

pub use config::WidgetConfig;
pub use currency::{format_currency, format_currency_with, ToPrice};
pub use widget::{compute_max_update, MaxPriceUpdate, PriceBounds, PriceRangeView, PriceRangeWidget};

// Errors raised while binding the widget to a page
#[derive(Debug)]
pub enum WidgetError {
    NoWindow,
    NoDocument,
    MissingElement(String),
    WrongElementType {
        id: String,
        expected: &'static str,
    },
    InvalidConfig(String),
    Listener(String),
    AlreadyMounted(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::NoWindow => write!(f, "No global window available"),
            WidgetError::NoDocument => write!(f, "Window has no document"),
            WidgetError::MissingElement(id) => write!(f, "No element with id '{}'", id),
            WidgetError::WrongElementType { id, expected } => {
                write!(f, "Element '{}' is not an {}", id, expected)
            }
            WidgetError::InvalidConfig(msg) => write!(f, "Invalid price slider options: {}", msg),
            WidgetError::Listener(msg) => write!(f, "Failed to register listener {}", msg),
            WidgetError::AlreadyMounted(id) => {
                write!(f, "A price slider is already mounted on '{}'", id)
            }
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Parse mount options coming from JavaScript. `undefined`/`null` means defaults.
fn config_from_js(options: JsValue) -> Result<WidgetConfig, WidgetError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| WidgetError::InvalidConfig(e.to_string()))
}

/// Bind a price slider on the current page.
///
/// # Arguments
/// * `options` - Optional object overriding element ids, price bounds,
///   currency label, fill property or min seeding (camelCase keys)
///
/// The bundle entry (`main`) already mounts with the default ids, so pages
/// using it only call this for extra sliders. Mounting the same slider id
/// twice is rejected rather than doubling its listeners.
///
/// # Returns
/// An `Error` describing the first element or option that could not be used
#[wasm_bindgen(js_name = mountPriceSlider)]
pub fn mount_price_slider(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = config_from_js(options)?;
    match dom::mount(&config) {
        Ok(widget) => {
            info!(
                "Slider range {}..{}",
                widget.bounds().abs_min,
                widget.bounds().abs_max
            );
            Ok(())
        }
        Err(e) => {
            warn!("Price slider not mounted: {}", e);
            Err(e.into())
        }
    }
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(value: f64) -> String {
    format_currency(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_element() {
        let err = WidgetError::MissingElement("max-price-slider".to_string());
        assert_eq!(err.to_string(), "No element with id 'max-price-slider'");

        let err = WidgetError::WrongElementType {
            id: "min-price-hidden".to_string(),
            expected: "HTMLInputElement",
        };
        assert_eq!(
            err.to_string(),
            "Element 'min-price-hidden' is not an HTMLInputElement"
        );
    }

    #[test]
    fn double_mount_error_names_the_slider() {
        let err = WidgetError::AlreadyMounted("max-price-slider".to_string());
        assert_eq!(
            err.to_string(),
            "A price slider is already mounted on 'max-price-slider'"
        );
    }

    #[test]
    fn exported_formatter_uses_default_label() {
        assert_eq!(format_currency_js(75000.0), "PKR75,000");
    }
}
