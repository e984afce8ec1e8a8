//! Serial peripheral interface.
//!
//! SPI1 and SPI5 sit on APB2, SPI2 on APB1. SPI2 and SPI5 double as I2S
//! interfaces; the I2S registers are part of the shared layout.

use crate::field_enum;

field_enum! {
    /// Baud rate control: peripheral clock divided by `2^(n+1)`.
    pub enum Baud: u32 {
        /// f_PCLK / 2.
        Div2 = 0b000,
        /// f_PCLK / 4.
        Div4 = 0b001,
        /// f_PCLK / 8.
        Div8 = 0b010,
        /// f_PCLK / 16.
        Div16 = 0b011,
        /// f_PCLK / 32.
        Div32 = 0b100,
        /// f_PCLK / 64.
        Div64 = 0b101,
        /// f_PCLK / 128.
        Div128 = 0b110,
        /// f_PCLK / 256.
        Div256 = 0b111,
    }
}

macro_rules! spi_instance {
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
                /// Clock phase.
                Cpha => cpha { 0 1 rw }
                /// Clock polarity.
                Cpol => cpol { 1 1 rw }
                /// Master selection.
                Mstr => mstr { 2 1 rw }
                /// Baud rate control.
                Br => br { 3 3 rw crate::map::spi::Baud }
                /// SPI enable.
                Spe => spe { 6 1 rw }
                /// Frame format.
                Lsbfirst => lsbfirst { 7 1 rw }
                /// Internal slave select.
                Ssi => ssi { 8 1 rw }
                /// Software slave management.
                Ssm => ssm { 9 1 rw }
                /// Receive only.
                Rxonly => rxonly { 10 1 rw }
                /// Data frame format.
                Dff => dff { 11 1 rw }
                /// Transmit CRC next.
                Crcnext => crcnext { 12 1 rw }
                /// Hardware CRC calculation enable.
                Crcen => crcen { 13 1 rw }
                /// Output enable in bidirectional mode.
                Bidioe => bidioe { 14 1 rw }
                /// Bidirectional data mode enable.
                Bidimode => bidimode { 15 1 rw }
            }

            crate::reg! {
                /// Control register 2.
                pub mod cr2 => Cr2;
                BASE + 0x04; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Rx buffer DMA enable.
                Rxdmaen => rxdmaen { 0 1 rw }
                /// Tx buffer DMA enable.
                Txdmaen => txdmaen { 1 1 rw }
                /// SS output enable.
                Ssoe => ssoe { 2 1 rw }
                /// Frame format.
                Frf => frf { 4 1 rw }
                /// Error interrupt enable.
                Errie => errie { 5 1 rw }
                /// RX buffer not empty interrupt enable.
                Rxneie => rxneie { 6 1 rw }
                /// Tx buffer empty interrupt enable.
                Txeie => txeie { 7 1 rw }
            }

            crate::reg! {
                /// Status register.
                ///
                /// CRCERR is cleared by writing zero; the other flags are
                /// cleared by the documented read sequences.
                pub mod sr => Sr;
                BASE + 0x08; u32; 0x0000_0002;
                RReg WReg;
                /// Receive buffer not empty.
                Rxne => rxne { 0 1 r }
                /// Transmit buffer empty.
                Txe => txe { 1 1 r }
                /// Channel side.
                Chside => chside { 2 1 r }
                /// Underrun flag.
                Udr => udr { 3 1 r }
                /// CRC error flag.
                Crcerr => crcerr { 4 1 rw }
                /// Mode fault.
                Modf => modf { 5 1 r }
                /// Overrun flag.
                Ovr => ovr { 6 1 r }
                /// Busy flag.
                Bsy => bsy { 7 1 r }
                /// Frame format error.
                Fre => fre { 8 1 r }
            }

            crate::reg! {
                /// Data register.
                ///
                /// Reading pops the receive FIFO and clears RXNE.
                pub mod dr => Dr;
                BASE + 0x0C; u32; 0x0000_0000;
                RReg WReg ReadSensitive;
                /// Data.
                Dr => dr { 0 16 rw }
            }

            crate::reg! {
                /// CRC polynomial register.
                pub mod crcpr => Crcpr;
                BASE + 0x10; u32; 0x0000_0007;
                RReg WReg;
                /// CRC polynomial.
                Crcpoly => crcpoly { 0 16 rw }
            }

            crate::reg! {
                /// RX CRC register.
                pub mod rxcrcr => Rxcrcr;
                BASE + 0x14; u32; 0x0000_0000;
                RReg RoReg;
                /// Rx CRC.
                Rxcrc => rxcrc { 0 16 r }
            }

            crate::reg! {
                /// TX CRC register.
                pub mod txcrcr => Txcrcr;
                BASE + 0x18; u32; 0x0000_0000;
                RReg RoReg;
                /// Tx CRC.
                Txcrc => txcrc { 0 16 r }
            }

            crate::reg! {
                /// I2S configuration register.
                pub mod i2scfgr => I2scfgr;
                BASE + 0x1C; u32; 0x0000_0000;
                RReg WReg;
                /// Channel length.
                Chlen => chlen { 0 1 rw }
                /// Data length to be transferred.
                Datlen => datlen { 1 2 rw }
                /// Steady state clock polarity.
                Ckpol => ckpol { 3 1 rw }
                /// I2S standard selection.
                I2sstd => i2sstd { 4 2 rw }
                /// PCM frame synchronization.
                Pcmsync => pcmsync { 7 1 rw }
                /// I2S configuration mode.
                I2scfg => i2scfg { 8 2 rw }
                /// I2S enable.
                I2se => i2se { 10 1 rw }
                /// I2S mode selection.
                I2smod => i2smod { 11 1 rw }
            }

            crate::reg! {
                /// I2S prescaler register.
                pub mod i2spr => I2spr;
                BASE + 0x20; u32; 0x0000_0002;
                RReg WReg;
                /// I2S linear prescaler.
                I2sdiv => i2sdiv { 0 8 rw }
                /// Odd factor for the prescaler.
                Odd => odd { 8 1 rw }
                /// Master clock output enable.
                Mckoe => mckoe { 9 1 rw }
            }

            crate::block! {
                /// Documented register layout of the instance block.
                pub const LAYOUT: BASE, 0x400;
                0x00 => Cr1<Shared>;
                0x04 => Cr2<Shared>;
                0x08 => Sr<Shared>;
                0x0C => Dr<Shared>;
                0x10 => Crcpr<Shared>;
                0x14 => Rxcrcr<Shared>;
                0x18 => Txcrcr<Shared>;
                0x1C => I2scfgr<Shared>;
                0x20 => I2spr<Shared>;
            }
        }
    };
}

spi_instance! {
    /// SPI1.
    pub mod spi1 => crate::mem::APB2_BASE + 0x3000;
}

spi_instance! {
    /// SPI2.
    pub mod spi2 => crate::mem::APB1_BASE + 0x3800;
}

spi_instance! {
    /// SPI5.
    pub mod spi5 => crate::mem::APB2_BASE + 0x5000;
}
