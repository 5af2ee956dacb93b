use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Greeter record snapshot
// ---------------------------------------------------------------------------

/// Serializable snapshot of a greeter's record fields.
///
/// Doubles as binding input: missing fields deserialize to empty strings,
/// which construction resolves to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreeterState {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub language: String,
}

// ---------------------------------------------------------------------------
// Catalog views
// ---------------------------------------------------------------------------

/// Full phrase set for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    pub code: String,
    pub greeting: String,
    #[serde(rename = "formalGreeting")]
    pub formal_greeting: String,
    #[serde(rename = "logPhrase")]
    pub log_phrase: String,
}
