//! Structured logging setup.
//!
//! All modules log through `tracing` macros and spans. This module installs the
//! subscriber that filters and prints them.
//!
//! # Configuration
//!
//! The filter is resolved in order:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! ```rust
//! use imagedeck::observability::init_tracing;
//! use imagedeck::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("controller starting");
//! ```

mod init;

pub use init::init_tracing;
