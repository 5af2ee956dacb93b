use salute_core::{greet_to_json, languages_to_json, validate_language_to_json};
use serde_json::Value;

fn assert_success(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], true, "expected success=true, got: {json}");
    v
}

fn assert_failure(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], false, "expected success=false, got: {json}");
    v
}

// ---------------------------------------------------------------------------
// greet_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_greet_informal() {
    let result = greet_to_json(r#"{"firstName":"John","lastName":"Doe"}"#);
    let v = assert_success(&result);
    assert_eq!(v["data"]["message"], "Hello John!");
    assert_eq!(v["data"]["fullName"], "John Doe");
    assert_eq!(v["data"]["state"]["language"], "en");
}

#[test]
fn ffi_greet_formal_spanish() {
    let result =
        greet_to_json(r#"{"firstName":"John","lastName":"Doe","language":"es","formal":true}"#);
    let v = assert_success(&result);
    assert_eq!(v["data"]["message"], "Saludos, John Doe");
    assert_eq!(v["data"]["state"]["language"], "es");
}

#[test]
fn ffi_greet_empty_params() {
    let result = greet_to_json("{}");
    let v = assert_success(&result);
    assert_eq!(v["data"]["message"], "Hello !");
    assert_eq!(v["data"]["state"]["firstName"], "");
    assert_eq!(v["data"]["state"]["language"], "en");
}

#[test]
fn ffi_greet_invalid_language() {
    let result = greet_to_json(r#"{"firstName":"John","language":"fr"}"#);
    let v = assert_failure(&result);
    let error = v["error"].as_str().unwrap();
    assert!(error.contains("fr"), "error should name the code: {error}");
}

#[test]
fn ffi_greet_malformed_input() {
    let result = greet_to_json("not json");
    let v = assert_failure(&result);
    assert!(v["error"]
        .as_str()
        .unwrap()
        .contains("Invalid params JSON"));
}

// ---------------------------------------------------------------------------
// validate_language_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_validate_supported() {
    let result = validate_language_to_json("es");
    let v = assert_success(&result);
    assert_eq!(v["data"]["code"], "es");
    assert_eq!(v["data"]["greeting"], "Hola");
    assert_eq!(v["data"]["formalGreeting"], "Saludos");
    assert_eq!(v["data"]["logPhrase"], "Inicio sesion");
}

#[test]
fn ffi_validate_unsupported() {
    let result = validate_language_to_json("de");
    let v = assert_failure(&result);
    assert!(v["error"].as_str().unwrap().contains("de"));
}

// ---------------------------------------------------------------------------
// languages_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_languages_listing() {
    let result = languages_to_json();
    let v = assert_success(&result);
    assert_eq!(v["data"]["version"], salute_core::CORE_VERSION);

    let languages = v["data"]["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["code"], "en");
    assert_eq!(languages[0]["greeting"], "Hello");
    assert_eq!(languages[1]["code"], "es");
}
