//! numbrid-lib — Numeral service engine.
//!
//! Spoken-clip cache, static file serving, and the HTTP API.
//! Depends on numbrid-core for pure types and numeral formatting.

pub mod audio_cache;
pub mod error;
pub mod server;

// Re-export numbrid-core for convenience
pub use numbrid_core;
