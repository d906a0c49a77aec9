//! Root diff engine.
//!
//! Compares two signed root-of-trust documents and produces a structured,
//! deterministic diff of key, role, and signature-status changes.
//!
//! ## Entry point
//!
//! ```ignore
//! use tufdiff_core::diff::engine::compare_root_bytes;
//!
//! let diff = compare_root_bytes(old_bytes, new_bytes)?;
//! let summary = tufdiff_core::diff::human_summary::render_human_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical structured diff
//!   output; maps and union sets enumerate in sorted order.
//! - **All-or-nothing**: either a complete [`model::RootDiff`] is returned
//!   or an error; there is no partial diff state.
//! - **Local anomaly handling**: dangling key references, duplicate
//!   signature entries, and missing owner metadata degrade per-entry and
//!   never fail the comparison.
//! - **Self-comparison rejection**: equal versions are an
//!   `InvalidComparison` error, never an empty diff.

pub mod engine;
pub mod human_summary;
pub mod keys;
pub mod model;
pub mod roles;
pub mod signatures;

pub use engine::{compare_root_bytes, compare_roots};
pub use human_summary::render_human_summary;
pub use model::RootDiff;
