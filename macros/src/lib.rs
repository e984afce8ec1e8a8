//! Procedural macros for sial.
//!
//! See the `sial` crate documentation for details.

#![recursion_limit = "256"]
#![warn(clippy::pedantic)]

mod bitfield;
mod tokens;

use proc_macro::TokenStream;

#[proc_macro_derive(Bitfield, attributes(bitfield))]
pub fn derive_bitfield(input: TokenStream) -> TokenStream {
    bitfield::proc_macro_derive(input)
}

#[proc_macro]
pub fn tokens(input: TokenStream) -> TokenStream {
    tokens::proc_macro(input)
}
