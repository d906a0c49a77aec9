//! Structured logging facility for tufdiff
//!
//! This module provides a canonical logging setup with a single
//! initialization point via `init(profile)`. The diff engine itself is
//! pure and silent; logging is for the surrounding layers (history
//! resolution, CLI) which emit `tracing` events during discovery and
//! parse fallbacks.

pub mod init;

pub use init::{init, Profile};
