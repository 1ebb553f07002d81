//! Text utilities for generated source
//!
//! Standalone helpers used around code generation, independent of the
//! graph and query layers:
//! - Whitespace normalization for generated source text
//! - Stable FNV-1a hashes and short base32 fingerprints
//! - Identifier and generic-name string helpers

mod fingerprint;
mod names;
mod normalize;

pub use fingerprint::*;
pub use names::*;
pub use normalize::*;
