//! System configuration controller.

use crate::reg::tag::Shared;

/// SYSCFG register block base address.
pub const BASE: usize = crate::mem::APB2_BASE + 0x3800;

crate::reg! {
    /// Memory remap register.
    pub mod memrmp => Memrmp;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg;
    /// Memory mapping selection.
    MemMode => mem_mode { 0 2 rw }
}

crate::reg! {
    /// Peripheral mode configuration register.
    pub mod pmc => Pmc;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg;
    /// ADC1DC2 option (refer to AN4073).
    Adc1dc2 => adc1dc2 { 16 1 rw }
}

crate::reg! {
    /// External interrupt configuration register 1 (lines 0..3).
    pub mod exticr1 => Exticr1;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// EXTI 0 source port.
    Exti0 => exti0 { 0 4 rw }
    /// EXTI 1 source port.
    Exti1 => exti1 { 4 4 rw }
    /// EXTI 2 source port.
    Exti2 => exti2 { 8 4 rw }
    /// EXTI 3 source port.
    Exti3 => exti3 { 12 4 rw }
}

crate::reg! {
    /// External interrupt configuration register 2 (lines 4..7).
    pub mod exticr2 => Exticr2;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg;
    /// EXTI 4 source port.
    Exti4 => exti4 { 0 4 rw }
    /// EXTI 5 source port.
    Exti5 => exti5 { 4 4 rw }
    /// EXTI 6 source port.
    Exti6 => exti6 { 8 4 rw }
    /// EXTI 7 source port.
    Exti7 => exti7 { 12 4 rw }
}

crate::reg! {
    /// External interrupt configuration register 3 (lines 8..11).
    pub mod exticr3 => Exticr3;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg;
    /// EXTI 8 source port.
    Exti8 => exti8 { 0 4 rw }
    /// EXTI 9 source port.
    Exti9 => exti9 { 4 4 rw }
    /// EXTI 10 source port.
    Exti10 => exti10 { 8 4 rw }
    /// EXTI 11 source port.
    Exti11 => exti11 { 12 4 rw }
}

crate::reg! {
    /// External interrupt configuration register 4 (lines 12..15).
    pub mod exticr4 => Exticr4;
    BASE + 0x14; u32; 0x0000_0000;
    RReg WReg;
    /// EXTI 12 source port.
    Exti12 => exti12 { 0 4 rw }
    /// EXTI 13 source port.
    Exti13 => exti13 { 4 4 rw }
    /// EXTI 14 source port.
    Exti14 => exti14 { 8 4 rw }
    /// EXTI 15 source port.
    Exti15 => exti15 { 12 4 rw }
}

crate::reg! {
    /// Configuration register 2.
    pub mod cfgr2 => Cfgr2;
    BASE + 0x1C; u32; 0x0000_0000;
    RReg WReg;
    /// Core lockup lock.
    LockupLock => lockup_lock { 0 1 rw }
    /// PVD lock.
    PvdLock => pvd_lock { 2 1 rw }
}

crate::reg! {
    /// Compensation cell control register.
    pub mod cmpcr => Cmpcr;
    BASE + 0x20; u32; 0x0000_0000;
    RReg RoReg;
    /// Compensation cell power-down.
    CmpPd => cmp_pd { 0 1 r }
    /// Compensation cell ready flag.
    Ready => ready { 8 1 r }
}

crate::reg! {
    /// Configuration register.
    pub mod cfgr => Cfgr;
    BASE + 0x2C; u32; 0x0000_0000;
    RReg WReg;
    /// Fm+ drive capability on the FMPI2C1 SCL pin.
    Fmpi2c1Scl => fmpi2c1_scl { 0 1 rw }
    /// Fm+ drive capability on the FMPI2C1 SDA pin.
    Fmpi2c1Sda => fmpi2c1_sda { 1 1 rw }
}

crate::block! {
    /// Documented register layout of the SYSCFG block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Memrmp<Shared>;
    0x04 => Pmc<Shared>;
    0x08 => Exticr1<Shared>;
    0x0C => Exticr2<Shared>;
    0x10 => Exticr3<Shared>;
    0x14 => Exticr4<Shared>;
    0x18 .. 0x1C;
    0x1C => Cfgr2<Shared>;
    0x20 => Cmpcr<Shared>;
    0x24 .. 0x2C;
    0x2C => Cfgr<Shared>;
}
