use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::GreetError;
use crate::types::LanguagePack;

/// Language codes with a complete phrase set.
/// Codes not in this set are rejected at construction and on `set_language`.
pub static SUPPORTED_LANGUAGES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("en");
    s.insert("es");
    s
});

/// Informal greeting openers, keyed by language code.
pub static GREETINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("en", "Hello");
    m.insert("es", "Hola");
    m
});

/// Formal greeting openers.
pub static FORMAL_GREETINGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("en", "Greetings");
        m.insert("es", "Saludos");
        m
    });

/// Phrases written to the log sink by `Greeter::log`.
pub static LOG_PHRASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("en", "Logged in");
    m.insert("es", "Inicio sesion");
    m
});

/// Language assigned when construction receives no code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Core library version constant.
pub const CORE_VERSION: &str = "0.1.0";

/// Full phrase set for one supported language code.
pub fn language_pack(code: &str) -> Result<LanguagePack, GreetError> {
    if !SUPPORTED_LANGUAGES.contains(code) {
        return Err(GreetError::InvalidLanguage {
            code: code.to_string(),
        });
    }
    Ok(LanguagePack {
        code: code.to_string(),
        greeting: phrase(&GREETINGS, code).to_string(),
        formal_greeting: phrase(&FORMAL_GREETINGS, code).to_string(),
        log_phrase: phrase(&LOG_PHRASES, code).to_string(),
    })
}

/// Phrase sets for every supported language, sorted by code.
pub fn language_packs() -> Vec<LanguagePack> {
    let mut codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().copied().collect();
    codes.sort_unstable();
    codes
        .into_iter()
        .map(|code| language_pack(code).expect("supported code has a pack"))
        .collect()
}

/// Catalog lookup. Falls back to an empty phrase for a code outside the
/// supported set — reachable only through a greeter whose `set_language`
/// already failed.
pub(crate) fn phrase(
    table: &'static LazyLock<HashMap<&'static str, &'static str>>,
    code: &str,
) -> &'static str {
    table.get(code).copied().unwrap_or_default()
}
