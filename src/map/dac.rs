//! Digital-to-analog converter.

use crate::reg::tag::Shared;

/// DAC register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x7400;

crate::reg! {
    /// Control register.
    pub mod cr => Cr;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Channel 1 enable.
    En1 => en1 { 0 1 rw }
    /// Channel 1 output buffer disable.
    Boff1 => boff1 { 1 1 rw }
    /// Channel 1 trigger enable.
    Ten1 => ten1 { 2 1 rw }
    /// Channel 1 trigger selection.
    Tsel1 => tsel1 { 3 3 rw }
    /// Channel 1 noise/triangle wave generation enable.
    Wave1 => wave1 { 6 2 rw }
    /// Channel 1 mask/amplitude selector.
    Mamp1 => mamp1 { 8 4 rw }
    /// Channel 1 DMA enable.
    Dmaen1 => dmaen1 { 12 1 rw }
    /// Channel 1 DMA underrun interrupt enable.
    Dmaudrie1 => dmaudrie1 { 13 1 rw }
    /// Channel 2 enable.
    En2 => en2 { 16 1 rw }
    /// Channel 2 output buffer disable.
    Boff2 => boff2 { 17 1 rw }
    /// Channel 2 trigger enable.
    Ten2 => ten2 { 18 1 rw }
    /// Channel 2 trigger selection.
    Tsel2 => tsel2 { 19 3 rw }
    /// Channel 2 noise/triangle wave generation enable.
    Wave2 => wave2 { 22 2 rw }
    /// Channel 2 mask/amplitude selector.
    Mamp2 => mamp2 { 24 4 rw }
    /// Channel 2 DMA enable.
    Dmaen2 => dmaen2 { 28 1 rw }
    /// Channel 2 DMA underrun interrupt enable.
    Dmaudrie2 => dmaudrie2 { 29 1 rw }
}

crate::reg! {
    /// Software trigger register.
    pub mod swtrigr => Swtrigr;
    BASE + 0x04; u32; 0x0000_0000;
    WReg WoReg;
    /// Channel 1 software trigger.
    Swtrig1 => swtrig1 { 0 1 w }
    /// Channel 2 software trigger.
    Swtrig2 => swtrig2 { 1 1 w }
}

crate::reg! {
    /// Channel 1 12-bit right-aligned data holding register.
    pub mod dhr12r1 => Dhr12r1;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 12-bit right-aligned data.
    Dacc1dhr => dacc1dhr { 0 12 rw }
}

crate::reg! {
    /// Channel 1 12-bit left-aligned data holding register.
    pub mod dhr12l1 => Dhr12l1;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 12-bit left-aligned data.
    Dacc1dhr => dacc1dhr { 4 12 rw }
}

crate::reg! {
    /// Channel 1 8-bit right-aligned data holding register.
    pub mod dhr8r1 => Dhr8r1;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 8-bit right-aligned data.
    Dacc1dhr => dacc1dhr { 0 8 rw }
}

crate::reg! {
    /// Channel 2 12-bit right-aligned data holding register.
    pub mod dhr12r2 => Dhr12r2;
    BASE + 0x14; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 2 12-bit right-aligned data.
    Dacc2dhr => dacc2dhr { 0 12 rw }
}

crate::reg! {
    /// Channel 2 12-bit left-aligned data holding register.
    pub mod dhr12l2 => Dhr12l2;
    BASE + 0x18; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 2 12-bit left-aligned data.
    Dacc2dhr => dacc2dhr { 4 12 rw }
}

crate::reg! {
    /// Channel 2 8-bit right-aligned data holding register.
    pub mod dhr8r2 => Dhr8r2;
    BASE + 0x1C; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 2 8-bit right-aligned data.
    Dacc2dhr => dacc2dhr { 0 8 rw }
}

crate::reg! {
    /// Dual 12-bit right-aligned data holding register.
    pub mod dhr12rd => Dhr12rd;
    BASE + 0x20; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 12-bit right-aligned data.
    Dacc1dhr => dacc1dhr { 0 12 rw }
    /// Channel 2 12-bit right-aligned data.
    Dacc2dhr => dacc2dhr { 16 12 rw }
}

crate::reg! {
    /// Dual 12-bit left-aligned data holding register.
    pub mod dhr12ld => Dhr12ld;
    BASE + 0x24; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 12-bit left-aligned data.
    Dacc1dhr => dacc1dhr { 4 12 rw }
    /// Channel 2 12-bit left-aligned data.
    Dacc2dhr => dacc2dhr { 20 12 rw }
}

crate::reg! {
    /// Dual 8-bit right-aligned data holding register.
    pub mod dhr8rd => Dhr8rd;
    BASE + 0x28; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 8-bit right-aligned data.
    Dacc1dhr => dacc1dhr { 0 8 rw }
    /// Channel 2 8-bit right-aligned data.
    Dacc2dhr => dacc2dhr { 8 8 rw }
}

crate::reg! {
    /// Channel 1 data output register.
    pub mod dor1 => Dor1;
    BASE + 0x2C; u32; 0x0000_0000;
    RReg RoReg;
    /// Channel 1 data output.
    Dacc1dor => dacc1dor { 0 12 r }
}

crate::reg! {
    /// Channel 2 data output register.
    pub mod dor2 => Dor2;
    BASE + 0x30; u32; 0x0000_0000;
    RReg RoReg;
    /// Channel 2 data output.
    Dacc2dor => dacc2dor { 0 12 r }
}

crate::reg! {
    /// Status register.
    pub mod sr => Sr;
    BASE + 0x34; u32; 0x0000_0000;
    RReg WReg;
    /// Channel 1 DMA underrun flag.
    Dmaudr1 => dmaudr1 { 13 1 w1c }
    /// Channel 2 DMA underrun flag.
    Dmaudr2 => dmaudr2 { 29 1 w1c }
}

crate::block! {
    /// Documented register layout of the DAC block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Cr<Shared>;
    0x04 => Swtrigr<Shared>;
    0x08 => Dhr12r1<Shared>;
    0x0C => Dhr12l1<Shared>;
    0x10 => Dhr8r1<Shared>;
    0x14 => Dhr12r2<Shared>;
    0x18 => Dhr12l2<Shared>;
    0x1C => Dhr8r2<Shared>;
    0x20 => Dhr12rd<Shared>;
    0x24 => Dhr12ld<Shared>;
    0x28 => Dhr8rd<Shared>;
    0x2C => Dor1<Shared>;
    0x30 => Dor2<Shared>;
    0x34 => Sr<Shared>;
}
