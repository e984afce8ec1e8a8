//! Cortex-M4 SysTick timer.

use crate::reg::tag::Shared;

/// SysTick register block base address.
pub const BASE: usize = 0xE000_E010;

crate::reg! {
    /// Control and status register.
    pub mod ctrl => Ctrl;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg;
    /// Counter enable.
    Enable => enable { 0 1 rw }
    /// SysTick exception request enable.
    Tickint => tickint { 1 1 rw }
    /// Clock source selection.
    Clksource => clksource { 2 1 rw }
    /// Returns 1 if the timer counted to 0 since the last read.
    Countflag => countflag { 16 1 r }
}

crate::reg! {
    /// Reload value register.
    pub mod load => Load;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg;
    /// Reload value at wrap.
    Reload => reload { 0 24 rw }
}

crate::reg! {
    /// Current value register.
    ///
    /// Any write clears the counter and the COUNTFLAG bit.
    pub mod val => Val;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Current counter value.
    Current => current { 0 24 rw }
}

crate::reg! {
    /// Calibration value register.
    pub mod calib => Calib;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg RoReg;
    /// Reload value for 10 ms timing.
    Tenms => tenms { 0 24 r }
    /// Calibration value is not exactly 10 ms.
    Skew => skew { 30 1 r }
    /// No external reference clock.
    Noref => noref { 31 1 r }
}

crate::block! {
    /// Documented register layout of the SysTick block.
    pub const LAYOUT: BASE, 0x10;
    0x00 => Ctrl<Shared>;
    0x04 => Load<Shared>;
    0x08 => Val<Shared>;
    0x0C => Calib<Shared>;
}
