//! Greeting utility WASM bindings.
//!
//! Two layers: JSON-string functions mirroring the core FFI API via
//! wasm-bindgen, and a browser driver that binds the greeter to the page
//! DOM (rendering surface) and the developer console (log sink).

use salute_core::surface::{LogSink, RenderSurface};
use salute_core::{greet_to_json, languages_to_json, validate_language_to_json};
use salute_core::{GreetError, Greeter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// JSON passthrough
// ---------------------------------------------------------------------------

/// Format a greeting and return it as JSON.
///
/// @param params_json - JSON object `{ firstName?, lastName?, language?, formal? }`
/// @returns JSON string with `{ success: boolean, data?: { message, fullName, state }, error?: string }`
#[wasm_bindgen(js_name = "greet")]
pub fn wasm_greet(params_json: &str) -> String {
    greet_to_json(params_json)
}

/// List supported languages with their phrase sets as JSON.
///
/// @returns JSON string with `{ success: boolean, data: { version, languages } }`
#[wasm_bindgen(js_name = "languages")]
pub fn wasm_languages() -> String {
    languages_to_json()
}

/// Check a language code and return its phrase set as JSON.
///
/// @param code - two-letter language code
/// @returns JSON string with `{ success: boolean, data?: LanguagePack, error?: string }`
#[wasm_bindgen(js_name = "validateLanguage")]
pub fn wasm_validate_language(code: &str) -> String {
    validate_language_to_json(code)
}

// ---------------------------------------------------------------------------
// Browser surfaces
// ---------------------------------------------------------------------------

/// Log sink backed by the browser console.
struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn write(&mut self, message: &str) {
        web_sys::console::log_1(&message.into());
    }
}

/// Rendering surface backed by the page DOM. Selectors resolve through
/// `Document::query_selector` to zero-or-one element.
struct DomSurface {
    document: web_sys::Document,
}

impl RenderSurface for DomSurface {
    fn set_content(&mut self, selector: &str, message: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => {
                element.set_inner_html(message);
                true
            }
            _ => false,
        }
    }
}

/// Current value of an input or select control; empty for anything else.
fn control_value(element: &web_sys::Element) -> String {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

fn page_document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js(&GreetError::RenderSurfaceUnavailable))
}

fn to_js(err: &GreetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---------------------------------------------------------------------------
// Page drivers
// ---------------------------------------------------------------------------

/// Render a greeting into the element matched by `selector` and write the
/// log line to the browser console. Intended for page event handlers.
#[wasm_bindgen(js_name = "renderGreeting")]
pub fn render_greeting(
    selector: &str,
    first_name: &str,
    last_name: &str,
    language: &str,
    formal: bool,
) -> Result<(), JsValue> {
    let document = page_document()?;

    let mut greeter = Greeter::new(first_name, last_name, language)
        .map_err(|e| to_js(&e))?
        .with_log_sink(ConsoleLog)
        .with_render_surface(DomSurface { document });

    greeter
        .render_to(selector, formal)
        .map_err(|e| to_js(&e))?
        .log();

    Ok(())
}

/// Login-button flow: hide the login region, read the language code from an
/// input control, then render the formal greeting and log it. Aborts at the
/// first failing step.
#[wasm_bindgen(js_name = "greetOnLogin")]
pub fn greet_on_login(
    first_name: &str,
    last_name: &str,
    login_selector: &str,
    language_selector: &str,
    target_selector: &str,
) -> Result<(), JsValue> {
    let document = page_document()?;

    if let Ok(Some(login)) = document.query_selector(login_selector) {
        if let Some(login) = login.dyn_ref::<web_sys::HtmlElement>() {
            login.style().set_property("display", "none").ok();
        }
    }

    // A missing or empty control yields an empty code, which set_language
    // rejects like any other unsupported value.
    let language = document
        .query_selector(language_selector)
        .ok()
        .flatten()
        .map(|el| control_value(&el))
        .unwrap_or_default();

    let mut greeter = Greeter::new(first_name, last_name, "")
        .map_err(|e| to_js(&e))?
        .with_log_sink(ConsoleLog)
        .with_render_surface(DomSurface { document });

    greeter
        .set_language(&language)
        .map_err(|e| to_js(&e))?
        .render_to(target_selector, true)
        .map_err(|e| to_js(&e))?
        .log();

    Ok(())
}
