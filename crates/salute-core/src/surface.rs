//! Host-environment surfaces a greeter writes to.
//!
//! The log sink is an optional capability: a greeter with no sink bound
//! degrades `greet`/`log` to a no-op. The rendering surface is required by
//! `render_to` and its absence is a caller-visible error.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Log sink
// ---------------------------------------------------------------------------

/// Capability that records a single line for operator visibility.
pub trait LogSink {
    fn write(&mut self, message: &str);
}

/// Log sink backed by standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Log sink that retains messages in memory, in write order.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to a greeter. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl LogSink for BufferSink {
    fn write(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

// ---------------------------------------------------------------------------
// Rendering surface
// ---------------------------------------------------------------------------

/// Capability that resolves a selector to zero-or-one target and replaces
/// the target's displayed content.
pub trait RenderSurface {
    /// Replace the content of the target matched by `selector`.
    /// Returns `false` when the selector matches nothing.
    fn set_content(&mut self, selector: &str, message: &str) -> bool;
}

/// In-memory rendering surface over a fixed set of named targets.
///
/// Selectors resolve only to targets registered up front; content written to
/// a target stays readable through any clone of the surface.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    targets: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySurface {
    /// Surface with the given target selectors, all initially empty.
    pub fn with_targets<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = selectors
            .into_iter()
            .map(|s| (s.into(), String::new()))
            .collect();
        Self {
            targets: Rc::new(RefCell::new(targets)),
        }
    }

    /// Current content of a target, or `None` for an unknown selector.
    pub fn content(&self, selector: &str) -> Option<String> {
        self.targets.borrow().get(selector).cloned()
    }
}

impl RenderSurface for MemorySurface {
    fn set_content(&mut self, selector: &str, message: &str) -> bool {
        match self.targets.borrow_mut().get_mut(selector) {
            Some(content) => {
                message.clone_into(content);
                true
            }
            None => false,
        }
    }
}
