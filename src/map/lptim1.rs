//! Low-power timer.

use crate::reg::tag::Shared;

/// LPTIM1 register block base address.
pub const BASE: usize = crate::mem::APB1_BASE + 0x2400;

crate::reg! {
    /// Interrupt and status register.
    ///
    /// Flags are acknowledged through the separate clear register, never
    /// by writing here.
    pub mod isr => Isr;
    BASE + 0x00; u32; 0x0000_0000;
    RReg RoReg;
    /// Compare match.
    Cmpm => cmpm { 0 1 r }
    /// Autoreload match.
    Arrm => arrm { 1 1 r }
    /// External trigger edge event.
    Exttrig => exttrig { 2 1 r }
    /// Compare register update OK.
    Cmpok => cmpok { 3 1 r }
    /// Autoreload register update OK.
    Arrok => arrok { 4 1 r }
    /// Counter direction change down to up.
    Up => up { 5 1 r }
    /// Counter direction change up to down.
    Down => down { 6 1 r }
}

crate::reg! {
    /// Interrupt clear register.
    ///
    /// The write-only mirror of the status register: storing a flag's bit
    /// clears it without touching its siblings.
    pub mod icr => Icr;
    BASE + 0x04; u32; 0x0000_0000;
    WReg WoReg;
    /// Compare match clear flag.
    Cmpmcf => cmpmcf { 0 1 w }
    /// Autoreload match clear flag.
    Arrmcf => arrmcf { 1 1 w }
    /// External trigger edge event clear flag.
    Exttrigcf => exttrigcf { 2 1 w }
    /// Compare register update OK clear flag.
    Cmpokcf => cmpokcf { 3 1 w }
    /// Autoreload register update OK clear flag.
    Arrokcf => arrokcf { 4 1 w }
    /// Counter direction change down to up clear flag.
    Upcf => upcf { 5 1 w }
    /// Counter direction change up to down clear flag.
    Downcf => downcf { 6 1 w }
}

crate::reg! {
    /// Interrupt enable register.
    pub mod ier => Ier;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Compare match interrupt enable.
    Cmpmie => cmpmie { 0 1 rw }
    /// Autoreload match interrupt enable.
    Arrmie => arrmie { 1 1 rw }
    /// External trigger edge event interrupt enable.
    Exttrigie => exttrigie { 2 1 rw }
    /// Compare register update OK interrupt enable.
    Cmpokie => cmpokie { 3 1 rw }
    /// Autoreload register update OK interrupt enable.
    Arrokie => arrokie { 4 1 rw }
    /// Counter direction change down to up interrupt enable.
    Upie => upie { 5 1 rw }
    /// Counter direction change up to down interrupt enable.
    Downie => downie { 6 1 rw }
}

crate::reg! {
    /// Configuration register.
    pub mod cfgr => Cfgr;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg;
    /// Clock selector.
    Cksel => cksel { 0 1 rw }
    /// Clock polarity.
    Ckpol => ckpol { 1 2 rw }
    /// Digital filter for the external clock.
    Ckflt => ckflt { 3 2 rw }
    /// Digital filter for the trigger.
    Trgflt => trgflt { 6 2 rw }
    /// Clock prescaler.
    Presc => presc { 9 3 rw }
    /// Trigger selector.
    Trigsel => trigsel { 13 3 rw }
    /// Trigger enable and polarity.
    Trigen => trigen { 17 2 rw }
    /// Timeout enable.
    Timout => timout { 19 1 rw }
    /// Waveform shape.
    Wave => wave { 20 1 rw }
    /// Waveform shape polarity.
    Wavpol => wavpol { 21 1 rw }
    /// Register update mode.
    Preload => preload { 22 1 rw }
    /// Counter mode enable.
    Countmode => countmode { 23 1 rw }
    /// Encoder mode enable.
    Enc => enc { 24 1 rw }
}

crate::reg! {
    /// Control register.
    pub mod cr => Cr;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg;
    /// Timer enable.
    Enable => enable { 0 1 rw }
    /// Timer start in single mode.
    Sngstrt => sngstrt { 1 1 rw }
    /// Timer start in continuous mode.
    Cntstrt => cntstrt { 2 1 rw }
}

crate::reg! {
    /// Compare register.
    pub mod cmp => Cmp;
    BASE + 0x14; u32; 0x0000_0000;
    RReg WReg;
    /// Compare value.
    Cmp => cmp { 0 16 rw }
}

crate::reg! {
    /// Autoreload register.
    pub mod arr => Arr;
    BASE + 0x18; u32; 0x0000_0001;
    RReg WReg;
    /// Autoreload value.
    Arr => arr { 0 16 rw }
}

crate::reg! {
    /// Counter register.
    ///
    /// Reliable only when read twice with the same result, because the
    /// counter may run from an asynchronous clock.
    pub mod cnt => Cnt;
    BASE + 0x1C; u32; 0x0000_0000;
    RReg RoReg;
    /// Counter value.
    Cnt => cnt { 0 16 r }
}

crate::reg! {
    /// Option register.
    pub mod or => Or;
    BASE + 0x20; u32; 0x0000_0000;
    RReg WReg;
    /// Input 1 remap selection.
    Or => or { 0 2 rw }
}

crate::block! {
    /// Documented register layout of the LPTIM1 block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Isr<Shared>;
    0x04 => Icr<Shared>;
    0x08 => Ier<Shared>;
    0x0C => Cfgr<Shared>;
    0x10 => Cr<Shared>;
    0x14 => Cmp<Shared>;
    0x18 => Arr<Shared>;
    0x1C => Cnt<Shared>;
    0x20 => Or<Shared>;
}
