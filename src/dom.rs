//! Browser binding: resolves the listing page elements once and wires the
//! slider and page-ready events to a [`PriceRangeWidget`].

use crate::config::{WidgetConfig, READY_EVENT, SLIDER_EVENT};
use crate::widget::{PriceRangeView, PriceRangeWidget};
use crate::WidgetError;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, HtmlInputElement};

thread_local! {
    /// Slider ids that already have a widget listening on them.
    static MOUNTED_SLIDERS: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

pub fn is_mounted(slider_id: &str) -> bool {
    MOUNTED_SLIDERS.with(|m| m.borrow().contains(slider_id))
}

/// Element handles for one price range widget.
pub struct DomView {
    min_display: Element,
    max_display: Element,
    slider: HtmlInputElement,
    min_hidden: HtmlInputElement,
    max_hidden: HtmlInputElement,
    fill_property: String,
}

/// Look up `id` and check it is a `T`.
fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

pub(crate) fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl DomView {
    pub fn bind(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self {
            min_display: element_by_id(document, &config.min_display_id, "Element")?,
            max_display: element_by_id(document, &config.max_display_id, "Element")?,
            slider: element_by_id(document, &config.slider_id, "HTMLInputElement")?,
            min_hidden: element_by_id(document, &config.min_hidden_id, "HTMLInputElement")?,
            max_hidden: element_by_id(document, &config.max_hidden_id, "HTMLInputElement")?,
            fill_property: config.fill_property.clone(),
        })
    }

    pub fn slider(&self) -> &HtmlInputElement {
        &self.slider
    }
}

impl PriceRangeView for DomView {
    fn min_hidden_value(&self) -> String {
        self.min_hidden.value()
    }

    fn set_min_hidden_value(&self, value: &str) {
        self.min_hidden.set_value(value);
    }

    fn slider_value(&self) -> String {
        self.slider.value()
    }

    fn set_slider_value(&self, value: &str) {
        self.slider.set_value(value);
    }

    fn set_min_display(&self, text: &str) {
        self.min_display.set_text_content(Some(text));
    }

    fn set_max_display(&self, text: &str) {
        self.max_display.set_text_content(Some(text));
    }

    fn set_max_hidden_value(&self, value: &str) {
        self.max_hidden.set_value(value);
    }

    fn set_fill_percent(&self, value: &str) {
        if let Err(e) = self.slider.style().set_property(&self.fill_property, value) {
            warn!(
                "Failed to set {} on slider: {}",
                self.fill_property,
                describe_js_error(&e)
            );
        }
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WidgetError> {
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WidgetError::Listener(format!("{}: {}", event, describe_js_error(&e))))?;
    // no teardown; the widget lives as long as the page
    closure.forget();
    debug!("Registered '{}' listener", event);
    Ok(())
}

/// Run `widget.initialize()` now, or on `DOMContentLoaded` from `target`
/// while the document is still loading.
pub fn schedule_initialize<V: PriceRangeView + 'static>(
    target: &EventTarget,
    ready: DocumentReadyState,
    widget: &Rc<PriceRangeWidget<V>>,
) -> Result<(), WidgetError> {
    if ready == DocumentReadyState::Loading {
        let widget = Rc::clone(widget);
        listen(target, READY_EVENT, move |_| {
            widget.initialize();
        })
    } else {
        widget.initialize();
        Ok(())
    }
}

/// Bind the widget to `document` and hook up its events.
///
/// The hidden minimum is seeded straight away (when enabled). Initialization
/// runs on `DOMContentLoaded`, or immediately if the document has already
/// finished parsing, which is common when the wasm module loads late.
///
/// A slider can only be mounted once per page; a second mount on the same
/// slider id fails with [`WidgetError::AlreadyMounted`] instead of stacking
/// another set of listeners.
pub fn mount_in(
    document: &Document,
    config: &WidgetConfig,
) -> Result<Rc<PriceRangeWidget<DomView>>, WidgetError> {
    config.validate()?;
    if is_mounted(&config.slider_id) {
        return Err(WidgetError::AlreadyMounted(config.slider_id.clone()));
    }
    let view = DomView::bind(document, config)?;
    let widget = Rc::new(PriceRangeWidget::from_config(view, config));

    if config.seed_min_price {
        widget.seed_min_price();
    }

    {
        let slider: EventTarget = widget.view().slider().clone().into();
        let widget = Rc::clone(&widget);
        listen(&slider, SLIDER_EVENT, move |_| {
            let value = widget.view().slider().value();
            widget.update_max_price(&value);
        })?;
    }

    schedule_initialize(document, document.ready_state(), &widget)?;

    MOUNTED_SLIDERS.with(|m| m.borrow_mut().insert(config.slider_id.clone()));
    info!("Price slider mounted on #{}", config.slider_id);
    Ok(widget)
}

/// Mount against the current window's document.
pub fn mount(config: &WidgetConfig) -> Result<Rc<PriceRangeWidget<DomView>>, WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    mount_in(&document, config)
}
