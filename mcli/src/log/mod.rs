// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` subscriber setup. The crate emits `tracing` events on its own, and
//! they go nowhere until one of the `try_initialize_logging_*` functions installs a
//! subscriber.

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
