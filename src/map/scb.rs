//! Cortex-M4 system control block.

use crate::reg::tag::Shared;

/// SCB register block base address.
pub const BASE: usize = 0xE000_ED00;

crate::reg! {
    /// CPUID base register.
    pub mod cpuid => Cpuid;
    BASE + 0x00; u32; 0x410F_C241;
    RReg RoReg;
    /// Revision number.
    Revision => revision { 0 4 r }
    /// Part number of the processor.
    Partno => partno { 4 12 r }
    /// Architecture.
    Architecture => architecture { 16 4 r }
    /// Variant number.
    Variant => variant { 20 4 r }
    /// Implementer code.
    Implementer => implementer { 24 8 r }
}

crate::reg! {
    /// Interrupt control and state register.
    pub mod icsr => Icsr;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg;
    /// Active vector number.
    Vectactive => vectactive { 0 9 r }
    /// No preempted active exceptions.
    Rettobase => rettobase { 11 1 r }
    /// Highest priority pending vector number.
    Vectpending => vectpending { 12 9 r }
    /// External interrupt pending.
    Isrpending => isrpending { 22 1 r }
    /// SysTick clear-pending.
    Pendstclr => pendstclr { 25 1 w }
    /// SysTick set-pending.
    Pendstset => pendstset { 26 1 rw }
    /// PendSV clear-pending.
    Pendsvclr => pendsvclr { 27 1 w }
    /// PendSV set-pending.
    Pendsvset => pendsvset { 28 1 rw }
    /// NMI set-pending.
    Nmipendset => nmipendset { 31 1 rw }
}

crate::reg! {
    /// Vector table offset register.
    pub mod vtor => Vtor;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// Vector table base offset; must be 128-byte aligned.
    Tbloff => tbloff { 7 25 rw }
}

crate::reg! {
    /// Application interrupt and reset control register.
    ///
    /// Writes take effect only with `0x05FA` in the key field; the key
    /// reads back as `0xFA05`.
    pub mod aircr => Aircr;
    BASE + 0x0C; u32; 0xFA05_0000;
    RReg WReg;
    /// Reserved for debug use.
    Vectreset => vectreset { 0 1 w }
    /// Reserved for debug use.
    Vectclractive => vectclractive { 1 1 w }
    /// System reset request.
    Sysresetreq => sysresetreq { 2 1 w }
    /// Interrupt priority grouping.
    Prigroup => prigroup { 8 3 rw }
    /// Memory system endianness.
    Endianess => endianess { 15 1 r }
    /// Register key.
    Vectkey => vectkey { 16 16 rw }
}

crate::reg! {
    /// System control register.
    pub mod scr => Scr;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg;
    /// Sleep on return to thread mode.
    Sleeponexit => sleeponexit { 1 1 rw }
    /// Deep sleep as the low power mode.
    Sleepdeep => sleepdeep { 2 1 rw }
    /// Wake up on pending interrupt.
    Sevonpend => sevonpend { 4 1 rw }
}

crate::reg! {
    /// Configuration and control register.
    pub mod ccr => Ccr;
    BASE + 0x14; u32; 0x0000_0200;
    RReg WReg;
    /// Thread mode entry with active exceptions enable.
    Nonbasethrdena => nonbasethrdena { 0 1 rw }
    /// Unprivileged software access to the STIR.
    Usersetmpend => usersetmpend { 1 1 rw }
    /// Trap on unaligned accesses.
    UnalignTrp => unalign_trp { 3 1 rw }
    /// Trap on divide by zero.
    Div0Trp => div_0_trp { 4 1 rw }
    /// Ignore precise data bus faults at priority -1 and -2.
    Bfhfnmign => bfhfnmign { 8 1 rw }
    /// 8-byte stack alignment on exception entry.
    Stkalign => stkalign { 9 1 rw }
}

crate::reg! {
    /// System handler priority register 1.
    pub mod shpr1 => Shpr1;
    BASE + 0x18; u32; 0x0000_0000;
    RReg WReg;
    /// Memory management fault priority.
    Pri4 => pri_4 { 0 8 rw }
    /// Bus fault priority.
    Pri5 => pri_5 { 8 8 rw }
    /// Usage fault priority.
    Pri6 => pri_6 { 16 8 rw }
}

crate::reg! {
    /// System handler priority register 2.
    pub mod shpr2 => Shpr2;
    BASE + 0x1C; u32; 0x0000_0000;
    RReg WReg;
    /// SVCall priority.
    Pri11 => pri_11 { 24 8 rw }
}

crate::reg! {
    /// System handler priority register 3.
    pub mod shpr3 => Shpr3;
    BASE + 0x20; u32; 0x0000_0000;
    RReg WReg;
    /// PendSV priority.
    Pri14 => pri_14 { 16 8 rw }
    /// SysTick priority.
    Pri15 => pri_15 { 24 8 rw }
}

crate::reg! {
    /// System handler control and state register.
    pub mod shcsr => Shcsr;
    BASE + 0x24; u32; 0x0000_0000;
    RReg WReg;
    /// Memory management fault active.
    Memfaultact => memfaultact { 0 1 rw }
    /// Bus fault active.
    Busfaultact => busfaultact { 1 1 rw }
    /// Usage fault active.
    Usgfaultact => usgfaultact { 3 1 rw }
    /// SVCall active.
    Svcallact => svcallact { 7 1 rw }
    /// Debug monitor active.
    Monitoract => monitoract { 8 1 rw }
    /// PendSV active.
    Pendsvact => pendsvact { 10 1 rw }
    /// SysTick active.
    Systickact => systickact { 11 1 rw }
    /// Usage fault pending.
    Usgfaultpended => usgfaultpended { 12 1 rw }
    /// Bus fault pending.
    Busfaultpended => busfaultpended { 13 1 rw }
    /// Memory management fault pending.
    Memfaultpended => memfaultpended { 14 1 rw }
    /// SVCall pending.
    Svcallpended => svcallpended { 15 1 rw }
    /// Memory management fault enable.
    Memfaultena => memfaultena { 16 1 rw }
    /// Bus fault enable.
    Busfaultena => busfaultena { 17 1 rw }
    /// Usage fault enable.
    Usgfaultena => usgfaultena { 18 1 rw }
}

crate::block! {
    /// Documented register layout of the SCB block.
    pub const LAYOUT: BASE, 0x40;
    0x00 => Cpuid<Shared>;
    0x04 => Icsr<Shared>;
    0x08 => Vtor<Shared>;
    0x0C => Aircr<Shared>;
    0x10 => Scr<Shared>;
    0x14 => Ccr<Shared>;
    0x18 => Shpr1<Shared>;
    0x1C => Shpr2<Shared>;
    0x20 => Shpr3<Shared>;
    0x24 => Shcsr<Shared>;
}
