//! Independent watchdog.

use crate::field_enum;
use crate::reg::tag::Shared;

/// IWDG register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x3000;

field_enum! {
    /// Watchdog prescaler divider.
    ///
    /// `0b110` and `0b111` both select divide-by-256; only the canonical
    /// encodings are legal here.
    pub enum Prescaler: u32 {
        /// Divider /4.
        Div4 = 0b000,
        /// Divider /8.
        Div8 = 0b001,
        /// Divider /16.
        Div16 = 0b010,
        /// Divider /32.
        Div32 = 0b011,
        /// Divider /64.
        Div64 = 0b100,
        /// Divider /128.
        Div128 = 0b101,
        /// Divider /256.
        Div256 = 0b110,
    }
}

crate::reg! {
    /// Key register.
    ///
    /// Write-only: `0xAAAA` reloads the counter, `0x5555` enables register
    /// access, `0xCCCC` starts the watchdog. Reads return zero.
    pub mod kr => Kr;
    BASE + 0x00; u32; 0x0000_0000;
    WReg WoReg;
    /// Key value.
    Key => key { 0 16 w }
}

crate::reg! {
    /// Prescaler register.
    pub mod pr => Pr;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg;
    /// Prescaler divider.
    Pr => pr { 0 3 rw crate::map::iwdg::Prescaler }
}

crate::reg! {
    /// Reload register.
    pub mod rlr => Rlr;
    BASE + 0x08; u32; 0x0000_0FFF;
    RReg WReg;
    /// Watchdog counter reload value.
    Rl => rl { 0 12 rw }
}

crate::reg! {
    /// Status register.
    pub mod sr => Sr;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg RoReg;
    /// Watchdog prescaler value update.
    Pvu => pvu { 0 1 r }
    /// Watchdog counter reload value update.
    Rvu => rvu { 1 1 r }
}

crate::block! {
    /// Documented register layout of the IWDG block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Kr<Shared>;
    0x04 => Pr<Shared>;
    0x08 => Rlr<Shared>;
    0x0C => Sr<Shared>;
}
