//! CRC calculation unit.
//!
//! The independent data register is the one 8-bit register on the chip;
//! the bytes around it are reserved and stated as such in the layout.

use crate::reg::tag::Shared;

/// CRC register block base address.
pub const BASE: usize = crate::mem::AHB1_BASE + 0x3000;

crate::reg! {
    /// Data register.
    ///
    /// Writing feeds the CRC computation; reading returns the current
    /// remainder.
    pub mod dr => Dr;
    BASE + 0x00; u32; 0xFFFF_FFFF;
    RReg WReg;
    /// Data.
    Dr => dr { 0 32 rw }
}

crate::reg! {
    /// Independent data register.
    pub mod idr => Idr;
    BASE + 0x04; u8; 0x00;
    RReg WReg;
    /// General-purpose 8-bit data.
    Idr => idr { 0 8 rw }
}

crate::reg! {
    /// Control register.
    pub mod cr => Cr;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Resets the CRC computation to `0xFFFF_FFFF`.
    Reset => reset { 0 1 w }
}

crate::block! {
    /// Documented register layout of the CRC block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Dr<Shared>;
    0x04 => Idr<Shared>;
    0x05 .. 0x08;
    0x08 => Cr<Shared>;
}
