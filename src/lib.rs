#![deny(missing_docs)]
#![no_std]

//! Facade over the coffer container crates.
//!
//! Re-exports [`coffer_collections_rs`] as [`collections`] so applications depend on a single
//! crate.

pub use coffer_collections_rs as collections;


/// Returns the facade crate version.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
