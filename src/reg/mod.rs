//! Safe API for memory-mapped registers.
//!
//! # Tokens
//!
//! A register is represented by a zero-sized [`Reg`] token parameterized by
//! an ownership [`tag`](tag): [`Uniq`](tag::Uniq) for the single exclusive
//! handle (the only tag with read-modify-write), [`Shared`](tag::Shared)
//! for an owned handle referenced from several places, and
//! [`Dup`](tag::Dup) for freely copyable observers. The token carries one
//! public field token per declared bit-field; all accesses go through the
//! tokens, so the caller can never touch bits it does not name.
//!
//! # Defining registers
//!
//! Registers are defined with the [`reg!`](crate::reg) macro:
//!
//! ```
//! use sial::reg::prelude::*;
//!
//! sial::reg! {
//!     /// Test register.
//!     pub mod tstr => Tstr;
//!     0x4000_1000; u32; 0x0000_0000;
//!     RReg WReg;
//!     /// Test enable bit.
//!     En => en { 0 1 rw }
//!     /// Test mode bits.
//!     Mode => mode { 1 3 rw }
//! }
//!
//! fn demo(mut tstr: Tstr<Uniq>) {
//!     tstr.modify(|val| val.set_en().write_mode(0b101));
//! }
//! # fn main() {}
//! ```
//!
//! The declared layout of a whole peripheral block is re-stated and
//! compile-time checked with the [`block!`](crate::block) macro, and the
//! legal values of enumerated fields are defined with
//! [`field_enum!`](crate::field_enum).
//!
//! # Concurrency contract
//!
//! Every access is a single volatile load or store. Read-modify-write
//! sequences are not atomic with respect to interrupts; this module makes
//! them available only through the `Uniq` tag, and callers sharing a
//! register with interrupt handlers must mask those interrupts or use the
//! hardware-atomic paths (split set/reset registers, write-one-to-clear
//! fields, bit-band aliases).

pub mod bitband;
pub mod block;
pub mod field;
pub mod prelude;
pub mod tag;

mod macros;
#[allow(clippy::module_inception)]
mod reg;

pub use self::block::{BlockEntry, BlockLayout};
pub use self::reg::{RReg, ReadSensitive, Reg, RegBits, RoReg, RwRegUniq, WReg, WoReg};

/// Defines the index of all register tokens of the device, plus one
/// peripheral struct and extractor macro per register block.
///
/// See [`map::Regs`](crate::map::Regs) for the generated index.
#[doc(inline)]
pub use sial_macros::tokens;

mod compile_tests {
    //! Writing a read-only register must not compile.
    //!
    //! ```compile_fail
    //! use sial::reg::prelude::*;
    //! let regs = unsafe { sial::map::Regs::take() };
    //! regs.gpioa_idr.store(|val| val);
    //! ```
    //!
    //! Reading a write-only register must not compile.
    //!
    //! ```compile_fail
    //! use sial::reg::prelude::*;
    //! let regs = unsafe { sial::map::Regs::take() };
    //! let _ = regs.gpioa_bsrr.load();
    //! ```
    //!
    //! Read-modify-write requires the unique tag.
    //!
    //! ```compile_fail
    //! use sial::reg::prelude::*;
    //! let mut regs = unsafe { sial::map::Regs::take() };
    //! regs.gpioa_moder.modify(|val| val);
    //! ```
    //!
    //! A value outside the closed enumeration of a field is
    //! unrepresentable as a literal.
    //!
    //! ```compile_fail
    //! let pull = sial::map::gpio::Pull::Both;
    //! ```
    //!
    //! The same accesses compile with the right tokens and tags.
    //!
    //! ```no_run
    //! use sial::reg::prelude::*;
    //! let regs = unsafe { sial::map::Regs::take() };
    //! let _ = regs.gpioa_idr.load();
    //! regs.gpioa_bsrr.store(|val| val.set_bs3());
    //! let mut moder = regs.gpioa_moder.into_uniq();
    //! moder.modify(|val| val.write_moder3(0b01));
    //! ```
}
