//! Exception boundaries.
//!
//! Bulwark bridges code that reports failure by unwinding into code that prefers explicit
//! values. Raise an [`Exception`] anywhere down the stack, and [`try_block`] hands it back to you as
//! an [`Option`] instead of letting it propagate further.
//!
//!
//! # Usage
//!
//! ```rust
//! use bulwark::*;
//!
//! fn launch(path: &str) {
//!     if path.is_empty() {
//!         raise!(name = "InvalidArgument"; "launch path not accessible");
//!     }
//! }
//!
//! assert!(try_block(|| launch("/bin/true")).is_none());
//!
//! let ex = try_block(|| launch("")).unwrap();
//! assert_eq!(ex.to_string(), "InvalidArgument: launch path not accessible");
//! ```
//!
//! A boundary recognizes exactly one kind of payload. [`try_block`] catches [`Exception`] and
//! nothing else: Rust panics and payloads of other types unwind straight through it, as if the
//! boundary wasn't there. The same holds for the typed [`catch`]/[`throw`] pair, which work with
//! any `'static + Send` payload type.
//!
//! The work passed to a boundary runs exactly once, synchronously. Its side effects up to the
//! raise are kept and its locals are dropped during unwinding. Boundaries hold no state, so they
//! nest and can be used from any number of threads at once; the innermost matching boundary wins.
//!
//!
//! # Logging
//!
//! Boundaries never log. With the `tracing` feature enabled, [`Exception::report`] records a
//! caught exception as a structured `tracing` event.
//!
//!
//! # Platform support
//!
//! Exceptions are Rust unwinding payloads, so boundaries need `panic = "unwind"`. With
//! `panic = "abort"`, raising an exception aborts the process.

#![forbid(unsafe_code)]
#![warn(
    clippy::pedantic,
    clippy::missing_const_for_fn,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::clone_on_ref_ptr,
    clippy::default_numeric_fallback,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::format_push_string,
    clippy::missing_assert_message,
    clippy::missing_inline_in_public_items,
    clippy::pub_without_shorthand,
    clippy::redundant_type_annotations,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::implicit_clone,
    clippy::tests_outside_test_module,
    clippy::try_err,
    clippy::unnecessary_self_imports,
    clippy::unused_result_ok,
    clippy::wildcard_enum_match_arm,
)]

extern crate alloc;

mod api;
mod backend;
mod exception;

pub use api::{catch, throw, try_block};
pub use exception::{DEFAULT_NAME, Exception};
