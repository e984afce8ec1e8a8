//! Window watchdog.

use crate::reg::tag::Shared;

/// WWDG register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x2C00;

crate::reg! {
    /// Control register.
    pub mod cr => Cr;
    BASE + 0x00; u32; 0x0000_007F;
    RReg WReg RegBitBand;
    /// 7-bit downcounter.
    T => t { 0 7 rw }
    /// Activation bit.
    Wdga => wdga { 7 1 rw }
}

crate::reg! {
    /// Configuration register.
    pub mod cfr => Cfr;
    BASE + 0x04; u32; 0x0000_007F;
    RReg WReg RegBitBand;
    /// 7-bit window value.
    W => w { 0 7 rw }
    /// Timer base.
    Wdgtb => wdgtb { 7 2 rw }
    /// Early wakeup interrupt enable.
    Ewi => ewi { 9 1 rw }
}

crate::reg! {
    /// Status register.
    ///
    /// The flag is cleared by writing zero; storing the reset value is the
    /// acknowledge path.
    pub mod sr => Sr;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Early wakeup interrupt flag.
    Ewif => ewif { 0 1 rw }
}

crate::block! {
    /// Documented register layout of the WWDG block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Cr<Shared>;
    0x04 => Cfr<Shared>;
    0x08 => Sr<Shared>;
}
