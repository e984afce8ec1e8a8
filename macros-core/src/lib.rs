//! Shared helpers for sial procedural macros.
//!
//! See the `sial` crate documentation for details.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod pascal_case;
mod snake_case;
mod unkeywordize;

pub use self::{pascal_case::pascal_case, snake_case::snake_case, unkeywordize::unkeywordize};
