//! The [`Token`] trait.
//!
//! A token is a zero-sized type, at most one instance of which ever exists.
//! Register state is genuinely shared, singleton, process-wide hardware
//! state, so every register and interrupt vector in this crate is
//! represented by such a token: holding the token *is* holding the
//! capability to touch the hardware it names. While affinity (move
//! semantics) is expressed by the Rust type system, the at-most-one
//! property cannot be, therefore the concept relies on two `unsafe`
//! contracts.
//!
//! 1. *Implementing* the trait is `unsafe`, and it is the implementer's
//!    responsibility to ensure the following:
//!
//!     * The type must not implement [`Clone`].
//!     * The type must be instantiated only inside the [`Token::take`]
//!       method.
//!     * The type must be zero-sized.
//!
//! 2. *Calling* [`Token::take`] is `unsafe`, and it is the caller's
//!    responsibility to ensure that at most one instance of the type ever
//!    exists.
//!
//! Tokens are nested to minimize the usage of the `unsafe` [`Token::take`]
//! constructor: taking the [`Regs`](crate::map::Regs) index once at the
//! start of the program yields every register token of the device, and
//! peripheral extractor macros move tokens out of the index without new
//! `unsafe`.
//!
//! Since tokens are zero-sized, [`Token::take`] is a no-op from the
//! assembly perspective. Likewise passing an instance around doesn't
//! consume the stack, and storing it inside other types doesn't consume
//! memory.

/// A zero-sized affine type, at most one instance of which ever exists.
///
/// # Safety
///
/// The above properties can't be expressed with the Rust type system,
/// therefore the trait is marked `unsafe`, and it is the implementer's
/// responsibility to keep the following invariants:
///
/// 1. The type must not implement [`Clone`].
/// 2. The type must be instantiated only inside the [`Token::take`] method.
/// 3. The type must be zero-sized.
pub unsafe trait Token: Sized + Send + 'static {
    /// Creates the token instance.
    ///
    /// # Safety
    ///
    /// At most one instance of the token must ever exist. This invariant
    /// can't be expressed with the Rust type system, therefore the method
    /// is marked `unsafe`, and it is the caller's responsibility to keep
    /// the invariant.
    ///
    /// It is recommended to call this method at the very beginning of the
    /// program and pass the instance further to the code.
    unsafe fn take() -> Self;
}

mod compile_tests {
    //! Tokens must not be constructible outside of `take`.
    //!
    //! ```compile_fail
    //! use core::marker::PhantomData;
    //! use sial::reg::tag::Shared;
    //! let moder0: sial::map::gpioa::moder::Moder0<Shared> =
    //!     sial::map::gpioa::moder::Moder0 { _tag: PhantomData };
    //! ```
    //!
    //! ```
    //! use sial::token::Token;
    //! let regs = unsafe { sial::map::Regs::take() };
    //! ```
}
