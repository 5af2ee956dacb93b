pub mod catalogs;
pub mod error;
pub mod ffi;
pub mod greeter;
pub mod surface;
pub mod types;

pub use catalogs::{language_pack, language_packs, CORE_VERSION, DEFAULT_LANGUAGE};
pub use error::GreetError;
pub use ffi::{greet_to_json, languages_to_json, validate_language_to_json};
pub use greeter::Greeter;
pub use surface::{BufferSink, ConsoleSink, LogSink, MemorySurface, RenderSurface};
pub use types::{GreeterState, LanguagePack};
