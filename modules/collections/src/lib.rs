#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::clone_on_copy)]
#![no_std]

//! Lock-guarded container toolkit.
//!
//! Stacks, queues and sets over contiguous or linked storage, each guarded by a single
//! reader/writer lock, plus two wrapping decorators: [`Bounded`](crate::core::collections::Bounded)
//! enforces a maximum element count and
//! [`RefusableStack`](crate::core::collections::RefusableStack) buffers pops until they are accepted
//! or refused. Everything under [`crate::core`] works in `no_std` environments; the `std` module
//! (feature `std`) adds containers locked by `std::sync::RwLock`.

extern crate alloc;

/// Runtime-agnostic containers and synchronization primitives.
pub mod core;
/// Containers backed by the standard library's lock primitives.
#[cfg(feature = "std")]
pub mod std;
