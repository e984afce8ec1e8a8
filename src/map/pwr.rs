//! Power controller.

use crate::reg::tag::Shared;

/// PWR register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x7000;

crate::reg! {
    /// Power control register.
    pub mod cr => Cr;
    BASE + 0x00; u32; 0x0000_C000;
    RReg WReg RegBitBand;
    /// Low-power deepsleep.
    Lpds => lpds { 0 1 rw }
    /// Power-down deepsleep.
    Pdds => pdds { 1 1 rw }
    /// Clear wakeup flag.
    Cwuf => cwuf { 2 1 w }
    /// Clear standby flag.
    Csbf => csbf { 3 1 w }
    /// Power voltage detector enable.
    Pvde => pvde { 4 1 rw }
    /// PVD level selection.
    Pls => pls { 5 3 rw }
    /// Disable backup domain write protection.
    Dbp => dbp { 8 1 rw }
    /// Flash power-down in Stop mode.
    Fpds => fpds { 9 1 rw }
    /// Low-power regulator low voltage in deepsleep.
    Lplvds => lplvds { 10 1 rw }
    /// Main regulator low voltage in deepsleep.
    Mrlvds => mrlvds { 11 1 rw }
    /// ADC DC bias control.
    Adcdc1 => adcdc1 { 13 1 rw }
    /// Regulator voltage scaling output selection.
    Vos => vos { 14 2 rw }
    /// Flash memory sleep while system run.
    Fmssr => fmssr { 20 1 rw }
    /// Flash interface stop while system run.
    Fissr => fissr { 21 1 rw }
}

crate::reg! {
    /// Power control and status register.
    pub mod csr => Csr;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Wakeup flag.
    Wuf => wuf { 0 1 r }
    /// Standby flag.
    Sbf => sbf { 1 1 r }
    /// PVD output.
    Pvdo => pvdo { 2 1 r }
    /// Backup regulator ready.
    Brr => brr { 3 1 r }
    /// Enable WKUP pin.
    Ewup => ewup { 8 1 rw }
    /// Backup regulator enable.
    Bre => bre { 9 1 rw }
    /// Regulator voltage scaling output selection ready.
    Vosrdy => vosrdy { 14 1 r }
}

crate::block! {
    /// Documented register layout of the PWR block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Cr<Shared>;
    0x04 => Csr<Shared>;
}
