//! Flash memory interface.

use crate::field_enum;
use crate::reg::tag::Shared;

/// Flash interface register block base address.
pub const BASE: usize = crate::mem::AHB1_BASE + 0x3C00;

field_enum! {
    /// Program/erase parallelism.
    pub enum Psize: u32 {
        /// Program 8 bits at a time.
        X8 = 0b00,
        /// Program 16 bits at a time.
        X16 = 0b01,
        /// Program 32 bits at a time.
        X32 = 0b10,
        /// Program 64 bits at a time.
        X64 = 0b11,
    }
}

crate::reg! {
    /// Flash access control register.
    pub mod acr => Acr;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Latency in wait states.
    Latency => latency { 0 4 rw }
    /// Prefetch enable.
    Prften => prften { 8 1 rw }
    /// Instruction cache enable.
    Icen => icen { 9 1 rw }
    /// Data cache enable.
    Dcen => dcen { 10 1 rw }
    /// Instruction cache reset.
    Icrst => icrst { 11 1 w }
    /// Data cache reset.
    Dcrst => dcrst { 12 1 rw }
}

crate::reg! {
    /// Flash key register.
    ///
    /// Write-only: the unlock key sequence is stored here, reads return
    /// zero.
    pub mod keyr => Keyr;
    BASE + 0x04; u32; 0x0000_0000;
    WReg WoReg;
    /// Unlock key.
    Key => key { 0 32 w }
}

crate::reg! {
    /// Flash option key register.
    pub mod optkeyr => Optkeyr;
    BASE + 0x08; u32; 0x0000_0000;
    WReg WoReg;
    /// Option byte unlock key.
    Optkey => optkey { 0 32 w }
}

crate::reg! {
    /// Flash status register.
    ///
    /// The error flags are write-one-to-clear.
    pub mod sr => Sr;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg;
    /// End of operation.
    Eop => eop { 0 1 w1c }
    /// Operation error.
    Sop => sop { 1 1 w1c }
    /// Write protection error.
    Wrperr => wrperr { 4 1 w1c }
    /// Programming alignment error.
    Pgaerr => pgaerr { 5 1 w1c }
    /// Programming parallelism error.
    Pgperr => pgperr { 6 1 w1c }
    /// Programming sequence error.
    Pgserr => pgserr { 7 1 w1c }
    /// Busy.
    Bsy => bsy { 16 1 r }
}

crate::reg! {
    /// Flash control register.
    pub mod cr => Cr;
    BASE + 0x10; u32; 0x8000_0000;
    RReg WReg;
    /// Programming.
    Pg => pg { 0 1 rw }
    /// Sector erase.
    Ser => ser { 1 1 rw }
    /// Mass erase.
    Mer => mer { 2 1 rw }
    /// Sector number.
    Snb => snb { 3 5 rw }
    /// Program size.
    Psize => psize { 8 2 rw crate::map::flash::Psize }
    /// Start.
    Strt => strt { 16 1 rw }
    /// End of operation interrupt enable.
    Eopie => eopie { 24 1 rw }
    /// Error interrupt enable.
    Errie => errie { 25 1 rw }
    /// Lock.
    Lock => lock { 31 1 rw }
}

crate::reg! {
    /// Flash option control register.
    pub mod optcr => Optcr;
    BASE + 0x14; u32; 0x0FFF_AAED;
    RReg WReg;
    /// Option byte lock.
    Optlock => optlock { 0 1 rw }
    /// Option byte start.
    Optstrt => optstrt { 1 1 rw }
    /// Brown-out reset level.
    BorLev => bor_lev { 2 2 rw }
    /// Watchdog selection.
    WdgSw => wdg_sw { 5 1 rw }
    /// No reset on stop.
    NrstStop => nrst_stop { 6 1 rw }
    /// No reset on standby.
    NrstStdby => nrst_stdby { 7 1 rw }
    /// Read protection level.
    Rdp => rdp { 8 8 rw }
    /// Write protection of sectors.
    Wrp => wrp { 16 8 rw }
}

crate::reg! {
    /// Flash option control register 1.
    pub mod optcr1 => Optcr1;
    BASE + 0x18; u32; 0x0FFF_0000;
    RReg WReg;
    /// Not-write-protect of sectors.
    Nwrp => nwrp { 16 12 rw }
}

crate::block! {
    /// Documented register layout of the flash interface block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Acr<Shared>;
    0x04 => Keyr<Shared>;
    0x08 => Optkeyr<Shared>;
    0x0C => Sr<Shared>;
    0x10 => Cr<Shared>;
    0x14 => Optcr<Shared>;
    0x18 => Optcr1<Shared>;
}
