//! tufdiff Core - Root-of-trust metadata comparison engine
//!
//! This crate provides the data model and pure computation for comparing
//! two signed TUF root metadata documents, including:
//! - Signed root envelope model with staged, tolerant parsing
//! - Key-set, role-set, and signature-status differs
//! - A diff aggregator producing one immutable structured result
//! - Presentation formatters for dates, timespans, and key ids
//! - The version-history resolution contract for I/O collaborators
//!
//! The engine is synchronous, single-threaded, and side-effect free:
//! every entry point takes fully-materialized inputs and returns an owned
//! value. Signature presence is checked syntactically only; cryptographic
//! verification is out of scope.

pub mod diff;
pub mod errors;
pub mod format;
pub mod history;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{compare_root_bytes, compare_roots, render_human_summary, RootDiff};
pub use errors::{Result, TufDiffError};
pub use history::{versions_consecutive, RootHistory};
pub use model::{
    parse_root_envelope_bytes, KeyRecord, RoleRecord, RootMetadata, SignatureEntry,
    SignedRootEnvelope,
};
