//! Browser host on top of `web-sys`
//!
//! Build with `--features web --target wasm32-unknown-unknown` and call
//! `installPaymentFormatters()` from the page.

use crate::core::binder::FormBinder;
use crate::core::formatter::{format_card_number, format_cvv};
use crate::domain::ports::{FormHost, InputField, InputHandler, ReadyCallback};
use crate::utils::error::{FormatError, Result};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

fn js_error(context: &str, err: JsValue) -> FormatError {
    FormatError::host(format!("{}: {:?}", context, err))
}

#[derive(Debug, Clone)]
pub struct WebField {
    element: HtmlInputElement,
}

impl InputField for WebField {
    fn name(&self) -> Option<String> {
        self.element.get_attribute("name")
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        self.element.set_value(value);
    }
}

#[derive(Debug, Clone)]
pub struct WebForm {
    document: Document,
}

impl WebForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| FormatError::host("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| FormatError::host("window has no document"))?;
        Ok(Self::new(document))
    }
}

impl FormHost for WebForm {
    type Field = WebField;

    fn inputs_named(&self, name: &str) -> Result<Vec<WebField>> {
        let selector = format!("input[name=\"{}\"]", name);
        let nodes = self
            .document
            .query_selector_all(&selector)
            .map_err(|e| js_error("querySelectorAll", e))?;

        let mut fields = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                if let Ok(element) = node.dyn_into::<HtmlInputElement>() {
                    fields.push(WebField { element });
                }
            }
        }
        Ok(fields)
    }

    fn listen_input(&self, field: &WebField, mut handler: InputHandler<WebField>) -> Result<()> {
        let target = field.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler(&target));

        field
            .element
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(|e| js_error("addEventListener(input)", e))?;

        // listeners live as long as the page
        closure.forget();
        Ok(())
    }

    fn when_ready(&self, callback: ReadyCallback) -> Result<()> {
        if self.document.ready_state() != "loading" {
            callback();
            return Ok(());
        }

        let closure = Closure::once(move |_event: Event| callback());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| js_error("addEventListener(DOMContentLoaded)", e))?;
        closure.forget();
        Ok(())
    }
}

/// Wires `card_number` and `cvv` inputs of the current page.
#[wasm_bindgen(js_name = installPaymentFormatters)]
pub fn install_payment_formatters() -> std::result::Result<(), JsValue> {
    let form = WebForm::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    FormBinder::default()
        .install(Rc::new(form))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = formatCardNumber)]
pub fn format_card_number_js(value: &str) -> String {
    format_card_number(value)
}

#[wasm_bindgen(js_name = formatCvv)]
pub fn format_cvv_js(value: &str) -> String {
    format_cvv(value)
}
