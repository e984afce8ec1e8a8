//! Basic timer TIM6.

use crate::reg::tag::Shared;

/// TIM6 register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x1000;

crate::reg! {
    /// Control register 1.
    pub mod cr1 => Cr1;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Counter enable.
    Cen => cen { 0 1 rw }
    /// Update disable.
    Udis => udis { 1 1 rw }
    /// Update request source.
    Urs => urs { 2 1 rw }
    /// One-pulse mode.
    Opm => opm { 3 1 rw }
    /// Auto-reload preload enable.
    Arpe => arpe { 7 1 rw }
}

crate::reg! {
    /// Control register 2.
    pub mod cr2 => Cr2;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg;
    /// Master mode selection.
    Mms => mms { 4 3 rw }
}

crate::reg! {
    /// DMA/interrupt enable register.
    pub mod dier => Dier;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Update interrupt enable.
    Uie => uie { 0 1 rw }
    /// Update DMA request enable.
    Ude => ude { 8 1 rw }
}

crate::reg! {
    /// Status register.
    pub mod sr => Sr;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg;
    /// Update interrupt flag.
    Uif => uif { 0 1 w1c }
}

crate::reg! {
    /// Event generation register.
    pub mod egr => Egr;
    BASE + 0x14; u32; 0x0000_0000;
    WReg WoReg;
    /// Update generation.
    Ug => ug { 0 1 w }
}

crate::reg! {
    /// Counter.
    pub mod cnt => Cnt;
    BASE + 0x24; u32; 0x0000_0000;
    RReg WReg;
    /// Counter value.
    Cnt => cnt { 0 16 rw }
}

crate::reg! {
    /// Prescaler.
    pub mod psc => Psc;
    BASE + 0x28; u32; 0x0000_0000;
    RReg WReg;
    /// Prescaler value.
    Psc => psc { 0 16 rw }
}

crate::reg! {
    /// Auto-reload register.
    pub mod arr => Arr;
    BASE + 0x2C; u32; 0x0000_0000;
    RReg WReg;
    /// Auto-reload value.
    Arr => arr { 0 16 rw }
}

crate::block! {
    /// Documented register layout of the TIM6 block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Cr1<Shared>;
    0x04 => Cr2<Shared>;
    0x08 .. 0x0C;
    0x0C => Dier<Shared>;
    0x10 => Sr<Shared>;
    0x14 => Egr<Shared>;
    0x18 .. 0x24;
    0x24 => Cnt<Shared>;
    0x28 => Psc<Shared>;
    0x2C => Arr<Shared>;
}
