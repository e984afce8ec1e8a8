//! Memory-mapped register map layer for STM32F410 microcontrollers.
//!
//! This crate is a compile-time description of the memory-mapped hardware
//! of the STM32F410: region bases, peripheral block layouts, register
//! bit-fields, and interrupt vector numbering, exposed through zero-sized
//! ownership tokens. It defines *where* things are and *what shape* they
//! have; interpreting register contents is the business of the drivers
//! built on top.
//!
//! # Usage
//!
//! Take the register token index once at the start of the program and
//! extract peripheral tokens from it:
//!
//! ```no_run
//! use sial::reg::prelude::*;
//! use sial::token::Token;
//!
//! let reg = unsafe { sial::map::Regs::take() };
//! let gpiob = sial::periph_gpiob!(reg);
//! let mut moder = gpiob.moder.into_uniq();
//! moder.modify(|val| val.write_moder5(0b01));
//! # drop(moder);
//! ```
//!
//! The token index may be taken only once; every register has at most one
//! owned handle, and read-modify-write is available only through the
//! unique tag. See the [`reg`] module for the concurrency contract.
//!
//! # Clock gating
//!
//! A peripheral register block responds on the bus only after its clock is
//! enabled in the corresponding RCC enable register. This is a documented
//! runtime precondition on callers, not a type-level one; see
//! [`map::rcc`].

#![warn(missing_docs)]
#![no_std]

extern crate self as sial;

pub mod bitfield;
pub mod irq;
pub mod map;
pub mod mem;
pub mod reg;
pub mod token;
