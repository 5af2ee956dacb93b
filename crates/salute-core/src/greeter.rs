use std::fmt;

use crate::catalogs::{
    phrase, DEFAULT_LANGUAGE, FORMAL_GREETINGS, GREETINGS, LOG_PHRASES, SUPPORTED_LANGUAGES,
};
use crate::error::GreetError;
use crate::surface::{LogSink, RenderSurface};
use crate::types::GreeterState;

/// A named person with a greeting language, plus the host surfaces the
/// greeter writes to.
///
/// Side-effecting operations return the greeter again so calls chain:
///
/// ```
/// use salute_core::{BufferSink, Greeter};
///
/// let sink = BufferSink::new();
/// let mut g = Greeter::new("John", "Doe", "")?.with_log_sink(sink.clone());
/// g.greet(false).set_language("es")?.greet(true).log();
/// assert_eq!(
///     sink.messages(),
///     vec!["Hello John!", "Saludos, John Doe", "Inicio sesion:John Doe"]
/// );
/// # Ok::<(), salute_core::GreetError>(())
/// ```
pub struct Greeter {
    first_name: String,
    last_name: String,
    language: String,
    log_sink: Option<Box<dyn LogSink>>,
    render_surface: Option<Box<dyn RenderSurface>>,
}

impl Greeter {
    /// Build a greeter. Empty name parts are kept as-is; an empty language
    /// code falls back to [`DEFAULT_LANGUAGE`]. Fails with
    /// `InvalidLanguage` for a code outside the supported set.
    pub fn new(first_name: &str, last_name: &str, language: &str) -> Result<Self, GreetError> {
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };
        let greeter = Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            language: language.to_string(),
            log_sink: None,
            render_surface: None,
        };
        greeter.validate()?;
        Ok(greeter)
    }

    /// Rebuild a greeter from a serialized snapshot.
    pub fn from_state(state: &GreeterState) -> Result<Self, GreetError> {
        Self::new(&state.first_name, &state.last_name, &state.language)
    }

    /// Bind the sink `greet` and `log` write to. Without one, both degrade
    /// to a no-op.
    pub fn with_log_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.log_sink = Some(Box::new(sink));
        self
    }

    /// Bind the surface `render_to` writes to.
    pub fn with_render_surface(mut self, surface: impl RenderSurface + 'static) -> Self {
        self.render_surface = Some(Box::new(surface));
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check the current language code against the supported set.
    pub fn validate(&self) -> Result<(), GreetError> {
        if SUPPORTED_LANGUAGES.contains(self.language.as_str()) {
            Ok(())
        } else {
            Err(GreetError::InvalidLanguage {
                code: self.language.clone(),
            })
        }
    }

    /// "first last", independent of the language code.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Informal greeting: "Hello John!".
    pub fn greeting(&self) -> String {
        format!("{} {}!", phrase(&GREETINGS, &self.language), self.first_name)
    }

    /// Formal greeting: "Greetings, John Doe".
    pub fn formal_greeting(&self) -> String {
        format!(
            "{}, {}",
            phrase(&FORMAL_GREETINGS, &self.language),
            self.full_name()
        )
    }

    /// Write the informal or formal greeting to the log sink.
    pub fn greet(&mut self, formal: bool) -> &mut Self {
        let message = if formal {
            self.formal_greeting()
        } else {
            self.greeting()
        };
        self.write_log(&message);
        self
    }

    /// Write the language's log phrase and the full name, colon-separated.
    pub fn log(&mut self) -> &mut Self {
        let line = format!(
            "{}:{}",
            phrase(&LOG_PHRASES, &self.language),
            self.full_name()
        );
        self.write_log(&line);
        self
    }

    /// Switch the greeting language in place, then re-check the supported
    /// set. A rejected code is NOT rolled back: the greeter keeps it and
    /// stays invalid until a later successful call.
    pub fn set_language(&mut self, code: &str) -> Result<&mut Self, GreetError> {
        code.clone_into(&mut self.language);
        self.validate()?;
        Ok(self)
    }

    /// Variant of [`set_language`](Self::set_language) that checks the code
    /// first and leaves the greeter untouched when it is rejected.
    pub fn set_language_strict(&mut self, code: &str) -> Result<&mut Self, GreetError> {
        if !SUPPORTED_LANGUAGES.contains(code) {
            return Err(GreetError::InvalidLanguage {
                code: code.to_string(),
            });
        }
        code.clone_into(&mut self.language);
        Ok(self)
    }

    /// Replace the content of the target matched by `selector` with the
    /// informal or formal greeting.
    pub fn render_to(&mut self, selector: &str, formal: bool) -> Result<&mut Self, GreetError> {
        let message = if formal {
            self.formal_greeting()
        } else {
            self.greeting()
        };
        let surface = self
            .render_surface
            .as_mut()
            .ok_or(GreetError::RenderSurfaceUnavailable)?;
        if selector.is_empty() || !surface.set_content(selector, &message) {
            return Err(GreetError::MissingTarget {
                selector: selector.to_string(),
            });
        }
        Ok(self)
    }

    /// Snapshot of the record fields.
    pub fn state(&self) -> GreeterState {
        GreeterState {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            language: self.language.clone(),
        }
    }

    fn write_log(&mut self, message: &str) {
        if let Some(sink) = self.log_sink.as_mut() {
            sink.write(message);
        }
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            log_sink: None,
            render_surface: None,
        }
    }
}

impl fmt::Debug for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Greeter")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("language", &self.language)
            .field("log_sink", &self.log_sink.is_some())
            .field("render_surface", &self.render_surface.is_some())
            .finish()
    }
}
