//! Universal synchronous/asynchronous receiver transmitter.
//!
//! USART1 and USART6 sit on APB2, USART2 on APB1. The three instances
//! share one register layout.

use crate::field_enum;

field_enum! {
    /// Number of stop bits.
    pub enum StopBits: u32 {
        /// 1 stop bit.
        Stop1 = 0b00,
        /// 0.5 stop bits.
        Stop0p5 = 0b01,
        /// 2 stop bits.
        Stop2 = 0b10,
        /// 1.5 stop bits.
        Stop1p5 = 0b11,
    }
}

macro_rules! usart_instance {
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
                /// Status register.
                ///
                /// RXNE, TC, LBD and CTS are cleared by software writing
                /// zero; the error flags are cleared by the documented
                /// read sequences involving DR.
                pub mod sr => Sr;
                BASE + 0x00; u32; 0x0000_00C0;
                RReg WReg;
                /// Parity error.
                Pe => pe { 0 1 r }
                /// Framing error.
                Fe => fe { 1 1 r }
                /// Noise detected flag.
                Nf => nf { 2 1 r }
                /// Overrun error.
                Ore => ore { 3 1 r }
                /// IDLE line detected.
                Idle => idle { 4 1 r }
                /// Read data register not empty.
                Rxne => rxne { 5 1 rw }
                /// Transmission complete.
                Tc => tc { 6 1 rw }
                /// Transmit data register empty.
                Txe => txe { 7 1 r }
                /// LIN break detection flag.
                Lbd => lbd { 8 1 rw }
                /// CTS flag.
                Cts => cts { 9 1 rw }
            }

            crate::reg! {
                /// Data register.
                ///
                /// Reading pops the receive buffer and clears RXNE; the
                /// read is a hardware side effect, not a pure load.
                pub mod dr => Dr;
                BASE + 0x04; u32; 0x0000_0000;
                RReg WReg ReadSensitive;
                /// Data value.
                Dr => dr { 0 9 rw }
            }

            crate::reg! {
                /// Baud rate register.
                pub mod brr => Brr;
                BASE + 0x08; u32; 0x0000_0000;
                RReg WReg;
                /// Fraction of USARTDIV.
                DivFraction => div_fraction { 0 4 rw }
                /// Mantissa of USARTDIV.
                DivMantissa => div_mantissa { 4 12 rw }
            }

            crate::reg! {
                /// Control register 1.
                pub mod cr1 => Cr1;
                BASE + 0x0C; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Send break.
                Sbk => sbk { 0 1 rw }
                /// Receiver wakeup.
                Rwu => rwu { 1 1 rw }
                /// Receiver enable.
                Re => re { 2 1 rw }
                /// Transmitter enable.
                Te => te { 3 1 rw }
                /// IDLE interrupt enable.
                Idleie => idleie { 4 1 rw }
                /// RXNE interrupt enable.
                Rxneie => rxneie { 5 1 rw }
                /// Transmission complete interrupt enable.
                Tcie => tcie { 6 1 rw }
                /// TXE interrupt enable.
                Txeie => txeie { 7 1 rw }
                /// PE interrupt enable.
                Peie => peie { 8 1 rw }
                /// Parity selection.
                Ps => ps { 9 1 rw }
                /// Parity control enable.
                Pce => pce { 10 1 rw }
                /// Wakeup method.
                Wake => wake { 11 1 rw }
                /// Word length.
                M => m { 12 1 rw }
                /// USART enable.
                Ue => ue { 13 1 rw }
                /// Oversampling by 8 enable.
                Over8 => over8 { 15 1 rw }
            }

            crate::reg! {
                /// Control register 2.
                pub mod cr2 => Cr2;
                BASE + 0x10; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Address of the USART node.
                Add => add { 0 4 rw }
                /// LIN break detection length.
                Lbdl => lbdl { 5 1 rw }
                /// LIN break detection interrupt enable.
                Lbdie => lbdie { 6 1 rw }
                /// Last bit clock pulse.
                Lbcl => lbcl { 8 1 rw }
                /// Clock phase.
                Cpha => cpha { 9 1 rw }
                /// Clock polarity.
                Cpol => cpol { 10 1 rw }
                /// Clock enable.
                Clken => clken { 11 1 rw }
                /// Number of stop bits.
                Stop => stop { 12 2 rw crate::map::usart::StopBits }
                /// LIN mode enable.
                Linen => linen { 14 1 rw }
            }

            crate::reg! {
                /// Control register 3.
                pub mod cr3 => Cr3;
                BASE + 0x14; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Error interrupt enable.
                Eie => eie { 0 1 rw }
                /// IrDA mode enable.
                Iren => iren { 1 1 rw }
                /// IrDA low-power.
                Irlp => irlp { 2 1 rw }
                /// Half-duplex selection.
                Hdsel => hdsel { 3 1 rw }
                /// Smartcard NACK enable.
                Nack => nack { 4 1 rw }
                /// Smartcard mode enable.
                Scen => scen { 5 1 rw }
                /// DMA enable receiver.
                Dmar => dmar { 6 1 rw }
                /// DMA enable transmitter.
                Dmat => dmat { 7 1 rw }
                /// RTS enable.
                Rtse => rtse { 8 1 rw }
                /// CTS enable.
                Ctse => ctse { 9 1 rw }
                /// CTS interrupt enable.
                Ctsie => ctsie { 10 1 rw }
                /// One sample bit method enable.
                Onebit => onebit { 11 1 rw }
            }

            crate::reg! {
                /// Guard time and prescaler register.
                pub mod gtpr => Gtpr;
                BASE + 0x18; u32; 0x0000_0000;
                RReg WReg;
                /// Prescaler value.
                Psc => psc { 0 8 rw }
                /// Guard time value.
                Gt => gt { 8 8 rw }
            }

            crate::block! {
                /// Documented register layout of the instance block.
                pub const LAYOUT: BASE, 0x400;
                0x00 => Sr<Shared>;
                0x04 => Dr<Shared>;
                0x08 => Brr<Shared>;
                0x0C => Cr1<Shared>;
                0x10 => Cr2<Shared>;
                0x14 => Cr3<Shared>;
                0x18 => Gtpr<Shared>;
            }
        }
    };
}

usart_instance! {
    /// USART1.
    pub mod usart1 => crate::mem::APB2_BASE + 0x1000;
}

usart_instance! {
    /// USART2.
    pub mod usart2 => crate::mem::APB1_BASE + 0x4400;
}

usart_instance! {
    /// USART6.
    pub mod usart6 => crate::mem::APB2_BASE + 0x1400;
}
