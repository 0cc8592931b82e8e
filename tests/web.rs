//! In-browser tests for the DOM binding. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use price_slider::dom::{is_mounted, mount_in, schedule_initialize, DomView};
use price_slider::{PriceRangeView, PriceRangeWidget, WidgetConfig, WidgetError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, DocumentReadyState, Event, EventTarget, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn input(doc: &Document, id: &str, kind: &str, value: &str) -> HtmlInputElement {
    let el: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    el.set_id(id);
    el.set_type(kind);
    if kind == "range" {
        el.set_min("900");
        el.set_max("75000");
    }
    el.set_value(value);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn span(doc: &Document, id: &str) -> HtmlElement {
    let el: HtmlElement = doc.create_element("span").unwrap().dyn_into().unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

struct Page {
    config: WidgetConfig,
    min_display: HtmlElement,
    max_display: HtmlElement,
    slider: HtmlInputElement,
    min_hidden: HtmlInputElement,
    max_hidden: HtmlInputElement,
}

/// Build the five elements under a unique prefix so tests don't see each other.
fn page(prefix: &str, slider_value: &str) -> Page {
    let doc = document();
    let config = WidgetConfig {
        min_display_id: format!("{}-min-display", prefix),
        max_display_id: format!("{}-max-display", prefix),
        slider_id: format!("{}-slider", prefix),
        min_hidden_id: format!("{}-min-hidden", prefix),
        max_hidden_id: format!("{}-max-hidden", prefix),
        ..WidgetConfig::default()
    };
    Page {
        min_display: span(&doc, &config.min_display_id),
        max_display: span(&doc, &config.max_display_id),
        slider: input(&doc, &config.slider_id, "range", slider_value),
        min_hidden: input(&doc, &config.min_hidden_id, "hidden", ""),
        max_hidden: input(&doc, &config.max_hidden_id, "hidden", ""),
        config,
    }
}

#[wasm_bindgen_test]
fn mount_initializes_page_state() {
    let p = page("init", "900");
    mount_in(&document(), &p.config).unwrap();

    assert_eq!(p.min_hidden.value(), "900");
    assert_eq!(p.min_display.text_content().unwrap(), "PKR900");
    assert_eq!(p.max_display.text_content().unwrap(), "PKR900");
    assert_eq!(p.max_hidden.value(), "900");
    assert_eq!(p.slider.style().get_property_value("--value-percent").unwrap(), "0%");
}

#[wasm_bindgen_test]
fn slider_input_event_updates_max_price() {
    let p = page("input", "900");
    mount_in(&document(), &p.config).unwrap();

    p.slider.set_value("75000");
    p.slider.dispatch_event(&Event::new("input").unwrap()).unwrap();

    assert_eq!(p.max_display.text_content().unwrap(), "PKR75,000");
    assert_eq!(p.max_hidden.value(), "75000");
    assert_eq!(p.slider.style().get_property_value("--value-percent").unwrap(), "100%");
}

#[wasm_bindgen_test]
fn value_below_min_resets_slider() {
    let p = page("clamp", "900");
    let widget = mount_in(&document(), &p.config).unwrap();
    p.min_hidden.set_value("5000");

    widget.update_max_price("2000");

    assert_eq!(p.slider.value(), "5000");
    assert_eq!(widget.view().slider_value(), "5000");
    assert_eq!(p.max_hidden.value(), "5000");
    assert_eq!(p.max_display.text_content().unwrap(), "PKR5,000");
}

#[wasm_bindgen_test]
fn missing_element_is_reported() {
    let p = page("missing", "900");
    let config = WidgetConfig {
        slider_id: "no-such-slider".to_string(),
        ..p.config
    };

    match mount_in(&document(), &config) {
        Err(WidgetError::MissingElement(id)) => assert_eq!(id, "no-such-slider"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("mount should fail without a slider"),
    }
}

#[wasm_bindgen_test]
fn wrong_element_type_is_reported() {
    let p = page("wrongtype", "900");
    let config = WidgetConfig {
        slider_id: p.config.min_display_id.clone(),
        ..p.config
    };

    let err = mount_in(&document(), &config).err().unwrap();
    assert!(matches!(err, WidgetError::WrongElementType { .. }));
}

#[wasm_bindgen_test]
fn loading_document_defers_initialization() {
    let p = page("deferred", "900");
    let view = DomView::bind(&document(), &p.config).unwrap();
    let widget = Rc::new(PriceRangeWidget::from_config(view, &p.config));
    widget.seed_min_price();
    let ready_source = EventTarget::new().unwrap();

    schedule_initialize(&ready_source, DocumentReadyState::Loading, &widget).unwrap();

    assert_eq!(p.min_display.text_content().unwrap_or_default(), "");
    assert_eq!(p.max_display.text_content().unwrap_or_default(), "");
    assert_eq!(p.slider.style().get_property_value("--value-percent").unwrap(), "");

    ready_source
        .dispatch_event(&Event::new("DOMContentLoaded").unwrap())
        .unwrap();

    assert_eq!(p.min_display.text_content().unwrap(), "PKR900");
    assert_eq!(p.max_display.text_content().unwrap(), "PKR900");
    assert_eq!(p.max_hidden.value(), "900");
    assert_eq!(p.slider.style().get_property_value("--value-percent").unwrap(), "0%");
}

#[wasm_bindgen_test]
fn parsed_document_initializes_without_event() {
    let p = page("immediate", "20000");
    let view = DomView::bind(&document(), &p.config).unwrap();
    let widget = Rc::new(PriceRangeWidget::from_config(view, &p.config));
    widget.seed_min_price();

    schedule_initialize(&EventTarget::new().unwrap(), DocumentReadyState::Complete, &widget).unwrap();

    assert_eq!(p.max_display.text_content().unwrap(), "PKR20,000");
}

#[wasm_bindgen_test]
fn second_mount_on_same_slider_is_rejected() {
    let p = page("twice", "900");
    mount_in(&document(), &p.config).unwrap();
    assert!(is_mounted(&p.config.slider_id));

    match mount_in(&document(), &p.config) {
        Err(WidgetError::AlreadyMounted(id)) => assert_eq!(id, p.config.slider_id),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("slider mounted twice"),
    }
}
