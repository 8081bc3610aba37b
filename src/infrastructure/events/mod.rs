//! Event Sink Implementations
//!
//! Provides concrete implementations of BootstrapEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
