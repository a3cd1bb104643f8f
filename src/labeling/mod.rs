//! Divisor labeling (generalized FizzBuzz).
//!
//! Each integer in `1..=N` is replaced by the text of the first rule whose
//! divisor divides it; integers no rule divides are kept as-is.
//!
//! Rules are checked in order and scanning stops at the first match, so
//! when divisors overlap the more specific rule must come first: the
//! default set lists 15 before 3 and 5.
//!
//! All validation happens when values are built. [`Rule`], [`Divisor`],
//! [`UpperBound`] and [`Configuration`] cannot hold invalid data, and
//! evaluation itself cannot fail once the bound is accepted.

mod config;
mod runner;
mod types;

pub use config::{Configuration, ConfigurationBuilder, DEFAULT_RULES};
pub use runner::{evaluate, Labels};
pub use types::{Divisor, Entry, Rule, UpperBound};
