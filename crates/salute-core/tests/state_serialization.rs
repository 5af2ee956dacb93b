use pretty_assertions::assert_eq;
use salute_core::{Greeter, GreeterState, LanguagePack};

#[test]
fn greeter_state_json_keys() {
    let state = Greeter::new("John", "Doe", "es").unwrap().state();
    let json = serde_json::to_value(&state).unwrap();
    let obj = json.as_object().unwrap();

    // Exact camelCase key set
    assert!(obj.contains_key("firstName"));
    assert!(obj.contains_key("lastName"));
    assert!(obj.contains_key("language"));
    assert_eq!(obj.len(), 3);

    assert_eq!(json["firstName"], "John");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["language"], "es");
}

#[test]
fn greeter_state_missing_fields_default() {
    let state: GreeterState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, GreeterState::default());

    let state: GreeterState = serde_json::from_str(r#"{"firstName":"Jane"}"#).unwrap();
    assert_eq!(state.first_name, "Jane");
    assert_eq!(state.last_name, "");
    assert_eq!(state.language, "");
}

#[test]
fn language_pack_json_keys() {
    let pack = salute_core::language_pack("en").unwrap();
    let json = serde_json::to_value(&pack).unwrap();
    let obj = json.as_object().unwrap();

    assert!(obj.contains_key("code"));
    assert!(obj.contains_key("greeting"));
    assert!(obj.contains_key("formalGreeting"));
    assert!(obj.contains_key("logPhrase"));
    assert_eq!(obj.len(), 4);
}

#[test]
fn language_pack_roundtrip() {
    let pack = salute_core::language_pack("es").unwrap();
    let json = serde_json::to_string(&pack).unwrap();
    let back: LanguagePack = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pack);
}
