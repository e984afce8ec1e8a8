//! Inter-integrated circuit interface.

macro_rules! i2c_instance {
    (
        $(#[$instance_attr:meta])*
        pub mod $instance:ident => $base:expr;
    ) => {
        $(#[$instance_attr])*
        pub mod $instance {
            use crate::reg::tag::Shared;

            /// Instance register block base address.
            pub const BASE: usize = $base;

            crate::reg! {
                /// Control register 1.
                pub mod cr1 => Cr1;
                BASE + 0x00; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Peripheral enable.
                Pe => pe { 0 1 rw }
                /// SMBus mode.
                Smbus => smbus { 1 1 rw }
                /// SMBus type.
                Smbtype => smbtype { 3 1 rw }
                /// ARP enable.
                Enarp => enarp { 4 1 rw }
                /// PEC enable.
                Enpec => enpec { 5 1 rw }
                /// General call enable.
                Engc => engc { 6 1 rw }
                /// Clock stretching disable (slave mode).
                Nostretch => nostretch { 7 1 rw }
                /// Start generation.
                Start => start { 8 1 rw }
                /// Stop generation.
                Stop => stop { 9 1 rw }
                /// Acknowledge enable.
                Ack => ack { 10 1 rw }
                /// Acknowledge/PEC position (for data reception).
                Pos => pos { 11 1 rw }
                /// Packet error checking.
                Pec => pec { 12 1 rw }
                /// SMBus alert.
                Alert => alert { 13 1 rw }
                /// Software reset.
                Swrst => swrst { 15 1 rw }
            }

            crate::reg! {
                /// Control register 2.
                pub mod cr2 => Cr2;
                BASE + 0x04; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Peripheral clock frequency.
                Freq => freq { 0 6 rw }
                /// Error interrupt enable.
                Iterren => iterren { 8 1 rw }
                /// Event interrupt enable.
                Itevten => itevten { 9 1 rw }
                /// Buffer interrupt enable.
                Itbufen => itbufen { 10 1 rw }
                /// DMA requests enable.
                Dmaen => dmaen { 11 1 rw }
                /// DMA last transfer.
                Last => last { 12 1 rw }
            }

            crate::reg! {
                /// Own address register 1.
                pub mod oar1 => Oar1;
                BASE + 0x08; u32; 0x0000_0000;
                RReg WReg;
                /// Interface address bit 0 (10-bit mode).
                Add0 => add0 { 0 1 rw }
                /// Interface address bits 7:1.
                Add1 => add1 { 1 7 rw }
                /// Interface address bits 9:8 (10-bit mode).
                Add8 => add8 { 8 2 rw }
                /// Addressing mode (slave mode).
                Addmode => addmode { 15 1 rw }
            }

            crate::reg! {
                /// Own address register 2.
                pub mod oar2 => Oar2;
                BASE + 0x0C; u32; 0x0000_0000;
                RReg WReg;
                /// Dual addressing mode enable.
                Endual => endual { 0 1 rw }
                /// Interface address 2.
                Add2 => add2 { 1 7 rw }
            }

            crate::reg! {
                /// Data register.
                ///
                /// Reading pops the receive buffer and clears RXNE.
                pub mod dr => Dr;
                BASE + 0x10; u32; 0x0000_0000;
                RReg WReg ReadSensitive;
                /// 8-bit data.
                Dr => dr { 0 8 rw }
            }

            crate::reg! {
                /// Status register 1.
                ///
                /// The event flags are cleared by the documented read
                /// sequences; the error flags are cleared by writing zero.
                pub mod sr1 => Sr1;
                BASE + 0x14; u32; 0x0000_0000;
                RReg WReg ReadSensitive;
                /// Start bit (master mode).
                Sb => sb { 0 1 r }
                /// Address sent (master) / matched (slave).
                Addr => addr { 1 1 r }
                /// Byte transfer finished.
                Btf => btf { 2 1 r }
                /// 10-bit header sent (master mode).
                Add10 => add10 { 3 1 r }
                /// Stop detection (slave mode).
                Stopf => stopf { 4 1 r }
                /// Data register not empty (receivers).
                Rxne => rxne { 6 1 r }
                /// Data register empty (transmitters).
                Txe => txe { 7 1 r }
                /// Bus error.
                Berr => berr { 8 1 rw }
                /// Arbitration lost (master mode).
                Arlo => arlo { 9 1 rw }
                /// Acknowledge failure.
                Af => af { 10 1 rw }
                /// Overrun/underrun.
                Ovr => ovr { 11 1 rw }
                /// PEC error in reception.
                Pecerr => pecerr { 12 1 rw }
                /// Timeout or Tlow error.
                Timeout => timeout { 14 1 rw }
                /// SMBus alert.
                Smbalert => smbalert { 15 1 rw }
            }

            crate::reg! {
                /// Status register 2.
                ///
                /// Reading SR2 after SR1 completes the ADDR clear sequence.
                pub mod sr2 => Sr2;
                BASE + 0x18; u32; 0x0000_0000;
                RReg RoReg ReadSensitive;
                /// Master/slave.
                Msl => msl { 0 1 r }
                /// Bus busy.
                Busy => busy { 1 1 r }
                /// Transmitter/receiver.
                Tra => tra { 2 1 r }
                /// General call address (slave mode).
                Gencall => gencall { 4 1 r }
                /// SMBus device default address (slave mode).
                Smbdefault => smbdefault { 5 1 r }
                /// SMBus host header (slave mode).
                Smbhost => smbhost { 6 1 r }
                /// Dual flag (slave mode).
                Dualf => dualf { 7 1 r }
                /// Packet error checking register.
                Pec => pec { 8 8 r }
            }

            crate::reg! {
                /// Clock control register.
                pub mod ccr => Ccr;
                BASE + 0x1C; u32; 0x0000_0000;
                RReg WReg;
                /// Clock control in Sm/Fm mode.
                Ccr => ccr { 0 12 rw }
                /// Fm mode duty cycle.
                Duty => duty { 14 1 rw }
                /// Master mode selection.
                Fs => fs { 15 1 rw }
            }

            crate::reg! {
                /// Rise time register.
                pub mod trise => Trise;
                BASE + 0x20; u32; 0x0000_0002;
                RReg WReg;
                /// Maximum rise time in Sm/Fm mode.
                Trise => trise { 0 6 rw }
            }

            crate::reg! {
                /// Noise filter register.
                pub mod fltr => Fltr;
                BASE + 0x24; u32; 0x0000_0000;
                RReg WReg;
                /// Digital noise filter.
                Dnf => dnf { 0 4 rw }
                /// Analog noise filter disable.
                Anoff => anoff { 4 1 rw }
            }

            crate::block! {
                /// Documented register layout of the instance block.
                pub const LAYOUT: BASE, 0x400;
                0x00 => Cr1<Shared>;
                0x04 => Cr2<Shared>;
                0x08 => Oar1<Shared>;
                0x0C => Oar2<Shared>;
                0x10 => Dr<Shared>;
                0x14 => Sr1<Shared>;
                0x18 => Sr2<Shared>;
                0x1C => Ccr<Shared>;
                0x20 => Trise<Shared>;
                0x24 => Fltr<Shared>;
            }
        }
    };
}

i2c_instance! {
    /// I2C1.
    pub mod i2c1 => crate::mem::APB1_BASE + 0x5400;
}

i2c_instance! {
    /// I2C2.
    pub mod i2c2 => crate::mem::APB1_BASE + 0x5800;
}
