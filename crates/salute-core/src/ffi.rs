//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area.

use serde::{Deserialize, Serialize};

use crate::catalogs::{language_pack, language_packs, CORE_VERSION};
use crate::greeter::Greeter;
use crate::types::{GreeterState, LanguagePack};

// ---------------------------------------------------------------------------
// Options types (deserialized from JSON input)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetParams {
    #[serde(flatten)]
    pub state: GreeterState,
    #[serde(default)]
    pub formal: bool,
}

// ---------------------------------------------------------------------------
// Result types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetData {
    pub message: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub state: GreeterState,
}

#[derive(Debug, Serialize)]
pub struct LanguagesData {
    pub version: &'static str,
    pub languages: Vec<LanguagePack>,
}

fn ok_json<T: Serialize>(data: T) -> String {
    let result = FfiResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&result).unwrap_or_else(|e| err_json(format!("JSON serialization error: {e}")))
}

fn err_json(message: String) -> String {
    serde_json::to_string(&FfiResult::<()> {
        success: false,
        data: None,
        error: Some(message),
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Build a greeter and return the requested greeting as JSON.
///
/// Input: JSON object `{ "firstName"?, "lastName"?, "language"?, "formal"? }`
/// Output: JSON string with `{ success, data?: { message, fullName, state }, error? }`
pub fn greet_to_json(params_json: &str) -> String {
    let params: GreetParams = match serde_json::from_str(params_json) {
        Ok(p) => p,
        Err(e) => return err_json(format!("Invalid params JSON: {e}")),
    };

    let greeter = match Greeter::from_state(&params.state) {
        Ok(g) => g,
        Err(e) => return err_json(e.to_string()),
    };

    let message = if params.formal {
        greeter.formal_greeting()
    } else {
        greeter.greeting()
    };

    ok_json(GreetData {
        message,
        full_name: greeter.full_name(),
        state: greeter.state(),
    })
}

/// Check a language code and return its phrase set as JSON.
///
/// Output: JSON string with `{ success, data?: LanguagePack, error? }`
pub fn validate_language_to_json(code: &str) -> String {
    match language_pack(code) {
        Ok(pack) => ok_json(pack),
        Err(e) => err_json(e.to_string()),
    }
}

/// List every supported language with its phrase set as JSON.
///
/// Output: JSON string with `{ success, data: { version, languages } }`
pub fn languages_to_json() -> String {
    ok_json(LanguagesData {
        version: CORE_VERSION,
        languages: language_packs(),
    })
}
