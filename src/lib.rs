//! Configurable divisor labeling: FizzBuzz with validated, order-sensitive
//! rules.
//!
//! - **Labeling**: evaluate `1..=N` against an ordered rule set, either
//!   eagerly ([`evaluate`]) or lazily ([`labeling::Configuration::labels`]).
//! - **Errors**: a single [`FizzBuzzError`] with one variant per violated
//!   input constraint.
//! - **Bindings**: optional `serde` support for rule sets and results, and a
//!   `wasm-bindgen` export behind the `wasm` feature.
//!
//! # Examples
//!
//! ```
//! use u_fizzbuzz::evaluate;
//!
//! for (i, entry) in evaluate(15, None).unwrap().iter().enumerate() {
//!     println!("{}: {}", i + 1, entry);
//! }
//! ```
//!
//! The crate performs no I/O; rendering and error reporting are left to the
//! caller.

pub mod error;
pub mod labeling;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FizzBuzzError, Result};
pub use labeling::evaluate;
