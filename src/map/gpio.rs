//! General-purpose I/Os.
//!
//! Ports A, B and C carry the full 16 pins; port H carries PH0/PH1 for the
//! HSE oscillator. The per-pin configuration fields of ports A and B reset
//! to non-zero values because the debug pins come up in alternate function
//! mode.

use crate::field_enum;

field_enum! {
    /// Pin mode.
    pub enum Mode: u32 {
        /// Input (reset state for most pins).
        Input = 0b00,
        /// General purpose output.
        Output = 0b01,
        /// Alternate function.
        Alternate = 0b10,
        /// Analog.
        Analog = 0b11,
    }
}

field_enum! {
    /// Pin output speed.
    pub enum Speed: u32 {
        /// Low speed.
        Low = 0b00,
        /// Medium speed.
        Medium = 0b01,
        /// Fast speed.
        Fast = 0b10,
        /// High speed.
        High = 0b11,
    }
}

field_enum! {
    /// Pin pull-up/pull-down configuration.
    ///
    /// Three of the four encodings are legal; `0b11` is reserved by the
    /// hardware.
    pub enum Pull: u32 {
        /// No pull-up, no pull-down.
        None = 0b00,
        /// Pull-up.
        Up = 0b01,
        /// Pull-down.
        Down = 0b10,
    }
}

macro_rules! gpio_port {
    (
        $(#[$port_attr:meta])*
        pub mod $port:ident => $base:expr;
        moder_reset => $moder_reset:expr;
        ospeedr_reset => $ospeedr_reset:expr;
        pupdr_reset => $pupdr_reset:expr;
    ) => {
        $(#[$port_attr])*
        pub mod $port {
            use crate::reg::tag::Shared;

            /// Port register block base address.
            pub const BASE: usize = $base;

            crate::reg! {
                /// GPIO port mode register.
                pub mod moder => Moder;
                BASE + 0x00; u32; $moder_reset;
                RReg WReg;
                /// Pin 0 mode.
                Moder0 => moder0 { 0 2 rw crate::map::gpio::Mode }
                /// Pin 1 mode.
                Moder1 => moder1 { 2 2 rw crate::map::gpio::Mode }
                /// Pin 2 mode.
                Moder2 => moder2 { 4 2 rw crate::map::gpio::Mode }
                /// Pin 3 mode.
                Moder3 => moder3 { 6 2 rw crate::map::gpio::Mode }
                /// Pin 4 mode.
                Moder4 => moder4 { 8 2 rw crate::map::gpio::Mode }
                /// Pin 5 mode.
                Moder5 => moder5 { 10 2 rw crate::map::gpio::Mode }
                /// Pin 6 mode.
                Moder6 => moder6 { 12 2 rw crate::map::gpio::Mode }
                /// Pin 7 mode.
                Moder7 => moder7 { 14 2 rw crate::map::gpio::Mode }
                /// Pin 8 mode.
                Moder8 => moder8 { 16 2 rw crate::map::gpio::Mode }
                /// Pin 9 mode.
                Moder9 => moder9 { 18 2 rw crate::map::gpio::Mode }
                /// Pin 10 mode.
                Moder10 => moder10 { 20 2 rw crate::map::gpio::Mode }
                /// Pin 11 mode.
                Moder11 => moder11 { 22 2 rw crate::map::gpio::Mode }
                /// Pin 12 mode.
                Moder12 => moder12 { 24 2 rw crate::map::gpio::Mode }
                /// Pin 13 mode.
                Moder13 => moder13 { 26 2 rw crate::map::gpio::Mode }
                /// Pin 14 mode.
                Moder14 => moder14 { 28 2 rw crate::map::gpio::Mode }
                /// Pin 15 mode.
                Moder15 => moder15 { 30 2 rw crate::map::gpio::Mode }
            }

            crate::reg! {
                /// GPIO port output type register.
                pub mod otyper => Otyper;
                BASE + 0x04; u32; 0x0000_0000;
                RReg WReg;
                /// Pin 0 output type: open-drain when set, push-pull when clear.
                Ot0 => ot0 { 0 1 rw }
                /// Pin 1 output type.
                Ot1 => ot1 { 1 1 rw }
                /// Pin 2 output type.
                Ot2 => ot2 { 2 1 rw }
                /// Pin 3 output type.
                Ot3 => ot3 { 3 1 rw }
                /// Pin 4 output type.
                Ot4 => ot4 { 4 1 rw }
                /// Pin 5 output type.
                Ot5 => ot5 { 5 1 rw }
                /// Pin 6 output type.
                Ot6 => ot6 { 6 1 rw }
                /// Pin 7 output type.
                Ot7 => ot7 { 7 1 rw }
                /// Pin 8 output type.
                Ot8 => ot8 { 8 1 rw }
                /// Pin 9 output type.
                Ot9 => ot9 { 9 1 rw }
                /// Pin 10 output type.
                Ot10 => ot10 { 10 1 rw }
                /// Pin 11 output type.
                Ot11 => ot11 { 11 1 rw }
                /// Pin 12 output type.
                Ot12 => ot12 { 12 1 rw }
                /// Pin 13 output type.
                Ot13 => ot13 { 13 1 rw }
                /// Pin 14 output type.
                Ot14 => ot14 { 14 1 rw }
                /// Pin 15 output type.
                Ot15 => ot15 { 15 1 rw }
            }

            crate::reg! {
                /// GPIO port output speed register.
                pub mod ospeedr => Ospeedr;
                BASE + 0x08; u32; $ospeedr_reset;
                RReg WReg;
                /// Pin 0 output speed.
                Ospeedr0 => ospeedr0 { 0 2 rw crate::map::gpio::Speed }
                /// Pin 1 output speed.
                Ospeedr1 => ospeedr1 { 2 2 rw crate::map::gpio::Speed }
                /// Pin 2 output speed.
                Ospeedr2 => ospeedr2 { 4 2 rw crate::map::gpio::Speed }
                /// Pin 3 output speed.
                Ospeedr3 => ospeedr3 { 6 2 rw crate::map::gpio::Speed }
                /// Pin 4 output speed.
                Ospeedr4 => ospeedr4 { 8 2 rw crate::map::gpio::Speed }
                /// Pin 5 output speed.
                Ospeedr5 => ospeedr5 { 10 2 rw crate::map::gpio::Speed }
                /// Pin 6 output speed.
                Ospeedr6 => ospeedr6 { 12 2 rw crate::map::gpio::Speed }
                /// Pin 7 output speed.
                Ospeedr7 => ospeedr7 { 14 2 rw crate::map::gpio::Speed }
                /// Pin 8 output speed.
                Ospeedr8 => ospeedr8 { 16 2 rw crate::map::gpio::Speed }
                /// Pin 9 output speed.
                Ospeedr9 => ospeedr9 { 18 2 rw crate::map::gpio::Speed }
                /// Pin 10 output speed.
                Ospeedr10 => ospeedr10 { 20 2 rw crate::map::gpio::Speed }
                /// Pin 11 output speed.
                Ospeedr11 => ospeedr11 { 22 2 rw crate::map::gpio::Speed }
                /// Pin 12 output speed.
                Ospeedr12 => ospeedr12 { 24 2 rw crate::map::gpio::Speed }
                /// Pin 13 output speed.
                Ospeedr13 => ospeedr13 { 26 2 rw crate::map::gpio::Speed }
                /// Pin 14 output speed.
                Ospeedr14 => ospeedr14 { 28 2 rw crate::map::gpio::Speed }
                /// Pin 15 output speed.
                Ospeedr15 => ospeedr15 { 30 2 rw crate::map::gpio::Speed }
            }

            crate::reg! {
                /// GPIO port pull-up/pull-down register.
                pub mod pupdr => Pupdr;
                BASE + 0x0C; u32; $pupdr_reset;
                RReg WReg;
                /// Pin 0 pull configuration.
                Pupdr0 => pupdr0 { 0 2 rw crate::map::gpio::Pull }
                /// Pin 1 pull configuration.
                Pupdr1 => pupdr1 { 2 2 rw crate::map::gpio::Pull }
                /// Pin 2 pull configuration.
                Pupdr2 => pupdr2 { 4 2 rw crate::map::gpio::Pull }
                /// Pin 3 pull configuration.
                Pupdr3 => pupdr3 { 6 2 rw crate::map::gpio::Pull }
                /// Pin 4 pull configuration.
                Pupdr4 => pupdr4 { 8 2 rw crate::map::gpio::Pull }
                /// Pin 5 pull configuration.
                Pupdr5 => pupdr5 { 10 2 rw crate::map::gpio::Pull }
                /// Pin 6 pull configuration.
                Pupdr6 => pupdr6 { 12 2 rw crate::map::gpio::Pull }
                /// Pin 7 pull configuration.
                Pupdr7 => pupdr7 { 14 2 rw crate::map::gpio::Pull }
                /// Pin 8 pull configuration.
                Pupdr8 => pupdr8 { 16 2 rw crate::map::gpio::Pull }
                /// Pin 9 pull configuration.
                Pupdr9 => pupdr9 { 18 2 rw crate::map::gpio::Pull }
                /// Pin 10 pull configuration.
                Pupdr10 => pupdr10 { 20 2 rw crate::map::gpio::Pull }
                /// Pin 11 pull configuration.
                Pupdr11 => pupdr11 { 22 2 rw crate::map::gpio::Pull }
                /// Pin 12 pull configuration.
                Pupdr12 => pupdr12 { 24 2 rw crate::map::gpio::Pull }
                /// Pin 13 pull configuration.
                Pupdr13 => pupdr13 { 26 2 rw crate::map::gpio::Pull }
                /// Pin 14 pull configuration.
                Pupdr14 => pupdr14 { 28 2 rw crate::map::gpio::Pull }
                /// Pin 15 pull configuration.
                Pupdr15 => pupdr15 { 30 2 rw crate::map::gpio::Pull }
            }

            crate::reg! {
                /// GPIO port input data register.
                pub mod idr => Idr;
                BASE + 0x10; u32; 0x0000_0000;
                RReg RoReg RegBitBand;
                /// Pin 0 input state.
                Id0 => id0 { 0 1 r }
                /// Pin 1 input state.
                Id1 => id1 { 1 1 r }
                /// Pin 2 input state.
                Id2 => id2 { 2 1 r }
                /// Pin 3 input state.
                Id3 => id3 { 3 1 r }
                /// Pin 4 input state.
                Id4 => id4 { 4 1 r }
                /// Pin 5 input state.
                Id5 => id5 { 5 1 r }
                /// Pin 6 input state.
                Id6 => id6 { 6 1 r }
                /// Pin 7 input state.
                Id7 => id7 { 7 1 r }
                /// Pin 8 input state.
                Id8 => id8 { 8 1 r }
                /// Pin 9 input state.
                Id9 => id9 { 9 1 r }
                /// Pin 10 input state.
                Id10 => id10 { 10 1 r }
                /// Pin 11 input state.
                Id11 => id11 { 11 1 r }
                /// Pin 12 input state.
                Id12 => id12 { 12 1 r }
                /// Pin 13 input state.
                Id13 => id13 { 13 1 r }
                /// Pin 14 input state.
                Id14 => id14 { 14 1 r }
                /// Pin 15 input state.
                Id15 => id15 { 15 1 r }
            }

            crate::reg! {
                /// GPIO port output data register.
                pub mod odr => Odr;
                BASE + 0x14; u32; 0x0000_0000;
                RReg WReg RegBitBand;
                /// Pin 0 output state.
                Od0 => od0 { 0 1 rw }
                /// Pin 1 output state.
                Od1 => od1 { 1 1 rw }
                /// Pin 2 output state.
                Od2 => od2 { 2 1 rw }
                /// Pin 3 output state.
                Od3 => od3 { 3 1 rw }
                /// Pin 4 output state.
                Od4 => od4 { 4 1 rw }
                /// Pin 5 output state.
                Od5 => od5 { 5 1 rw }
                /// Pin 6 output state.
                Od6 => od6 { 6 1 rw }
                /// Pin 7 output state.
                Od7 => od7 { 7 1 rw }
                /// Pin 8 output state.
                Od8 => od8 { 8 1 rw }
                /// Pin 9 output state.
                Od9 => od9 { 9 1 rw }
                /// Pin 10 output state.
                Od10 => od10 { 10 1 rw }
                /// Pin 11 output state.
                Od11 => od11 { 11 1 rw }
                /// Pin 12 output state.
                Od12 => od12 { 12 1 rw }
                /// Pin 13 output state.
                Od13 => od13 { 13 1 rw }
                /// Pin 14 output state.
                Od14 => od14 { 14 1 rw }
                /// Pin 15 output state.
                Od15 => od15 { 15 1 rw }
            }

            crate::reg! {
                /// GPIO port bit set/reset register.
                ///
                /// The dedicated atomic path for driving outputs: storing a
                /// set or reset bit affects only that pin, so no
                /// read-modify-write of ODR is needed.
                pub mod bsrr => Bsrr;
                BASE + 0x18; u32; 0x0000_0000;
                WReg WoReg;
                /// Set pin 0.
                Bs0 => bs0 { 0 1 w }
                /// Set pin 1.
                Bs1 => bs1 { 1 1 w }
                /// Set pin 2.
                Bs2 => bs2 { 2 1 w }
                /// Set pin 3.
                Bs3 => bs3 { 3 1 w }
                /// Set pin 4.
                Bs4 => bs4 { 4 1 w }
                /// Set pin 5.
                Bs5 => bs5 { 5 1 w }
                /// Set pin 6.
                Bs6 => bs6 { 6 1 w }
                /// Set pin 7.
                Bs7 => bs7 { 7 1 w }
                /// Set pin 8.
                Bs8 => bs8 { 8 1 w }
                /// Set pin 9.
                Bs9 => bs9 { 9 1 w }
                /// Set pin 10.
                Bs10 => bs10 { 10 1 w }
                /// Set pin 11.
                Bs11 => bs11 { 11 1 w }
                /// Set pin 12.
                Bs12 => bs12 { 12 1 w }
                /// Set pin 13.
                Bs13 => bs13 { 13 1 w }
                /// Set pin 14.
                Bs14 => bs14 { 14 1 w }
                /// Set pin 15.
                Bs15 => bs15 { 15 1 w }
                /// Reset pin 0.
                Br0 => br0 { 16 1 w }
                /// Reset pin 1.
                Br1 => br1 { 17 1 w }
                /// Reset pin 2.
                Br2 => br2 { 18 1 w }
                /// Reset pin 3.
                Br3 => br3 { 19 1 w }
                /// Reset pin 4.
                Br4 => br4 { 20 1 w }
                /// Reset pin 5.
                Br5 => br5 { 21 1 w }
                /// Reset pin 6.
                Br6 => br6 { 22 1 w }
                /// Reset pin 7.
                Br7 => br7 { 23 1 w }
                /// Reset pin 8.
                Br8 => br8 { 24 1 w }
                /// Reset pin 9.
                Br9 => br9 { 25 1 w }
                /// Reset pin 10.
                Br10 => br10 { 26 1 w }
                /// Reset pin 11.
                Br11 => br11 { 27 1 w }
                /// Reset pin 12.
                Br12 => br12 { 28 1 w }
                /// Reset pin 13.
                Br13 => br13 { 29 1 w }
                /// Reset pin 14.
                Br14 => br14 { 30 1 w }
                /// Reset pin 15.
                Br15 => br15 { 31 1 w }
            }

            crate::reg! {
                /// GPIO port configuration lock register.
                ///
                /// The lock key bit engages only after the documented
                /// write/read sequence; the shape here is plain read-write.
                pub mod lckr => Lckr;
                BASE + 0x1C; u32; 0x0000_0000;
                RReg WReg;
                /// Lock pin 0 configuration.
                Lck0 => lck0 { 0 1 rw }
                /// Lock pin 1 configuration.
                Lck1 => lck1 { 1 1 rw }
                /// Lock pin 2 configuration.
                Lck2 => lck2 { 2 1 rw }
                /// Lock pin 3 configuration.
                Lck3 => lck3 { 3 1 rw }
                /// Lock pin 4 configuration.
                Lck4 => lck4 { 4 1 rw }
                /// Lock pin 5 configuration.
                Lck5 => lck5 { 5 1 rw }
                /// Lock pin 6 configuration.
                Lck6 => lck6 { 6 1 rw }
                /// Lock pin 7 configuration.
                Lck7 => lck7 { 7 1 rw }
                /// Lock pin 8 configuration.
                Lck8 => lck8 { 8 1 rw }
                /// Lock pin 9 configuration.
                Lck9 => lck9 { 9 1 rw }
                /// Lock pin 10 configuration.
                Lck10 => lck10 { 10 1 rw }
                /// Lock pin 11 configuration.
                Lck11 => lck11 { 11 1 rw }
                /// Lock pin 12 configuration.
                Lck12 => lck12 { 12 1 rw }
                /// Lock pin 13 configuration.
                Lck13 => lck13 { 13 1 rw }
                /// Lock pin 14 configuration.
                Lck14 => lck14 { 14 1 rw }
                /// Lock pin 15 configuration.
                Lck15 => lck15 { 15 1 rw }
                /// Lock key.
                Lckk => lckk { 16 1 rw }
            }

            crate::reg! {
                /// GPIO alternate function low register (pins 0..7).
                pub mod afrl => Afrl;
                BASE + 0x20; u32; 0x0000_0000;
                RReg WReg;
                /// Pin 0 alternate function selection.
                Afrl0 => afrl0 { 0 4 rw }
                /// Pin 1 alternate function selection.
                Afrl1 => afrl1 { 4 4 rw }
                /// Pin 2 alternate function selection.
                Afrl2 => afrl2 { 8 4 rw }
                /// Pin 3 alternate function selection.
                Afrl3 => afrl3 { 12 4 rw }
                /// Pin 4 alternate function selection.
                Afrl4 => afrl4 { 16 4 rw }
                /// Pin 5 alternate function selection.
                Afrl5 => afrl5 { 20 4 rw }
                /// Pin 6 alternate function selection.
                Afrl6 => afrl6 { 24 4 rw }
                /// Pin 7 alternate function selection.
                Afrl7 => afrl7 { 28 4 rw }
            }

            crate::reg! {
                /// GPIO alternate function high register (pins 8..15).
                pub mod afrh => Afrh;
                BASE + 0x24; u32; 0x0000_0000;
                RReg WReg;
                /// Pin 8 alternate function selection.
                Afrh8 => afrh8 { 0 4 rw }
                /// Pin 9 alternate function selection.
                Afrh9 => afrh9 { 4 4 rw }
                /// Pin 10 alternate function selection.
                Afrh10 => afrh10 { 8 4 rw }
                /// Pin 11 alternate function selection.
                Afrh11 => afrh11 { 12 4 rw }
                /// Pin 12 alternate function selection.
                Afrh12 => afrh12 { 16 4 rw }
                /// Pin 13 alternate function selection.
                Afrh13 => afrh13 { 20 4 rw }
                /// Pin 14 alternate function selection.
                Afrh14 => afrh14 { 24 4 rw }
                /// Pin 15 alternate function selection.
                Afrh15 => afrh15 { 28 4 rw }
            }

            crate::block! {
                /// Documented register layout of the port block.
                pub const LAYOUT: BASE, 0x400;
                0x00 => Moder<Shared>;
                0x04 => Otyper<Shared>;
                0x08 => Ospeedr<Shared>;
                0x0C => Pupdr<Shared>;
                0x10 => Idr<Shared>;
                0x14 => Odr<Shared>;
                0x18 => Bsrr<Shared>;
                0x1C => Lckr<Shared>;
                0x20 => Afrl<Shared>;
                0x24 => Afrh<Shared>;
            }

            /// Legacy names retained from older device headers.
            ///
            /// Every alias is a re-export of the canonical definition, so
            /// the numeric constants cannot diverge.
            pub mod legacy {
                pub use super::idr::{
                    Id0 as Idr0, Id1 as Idr1, Id2 as Idr2, Id3 as Idr3, Id4 as Idr4, Id5 as Idr5,
                    Id6 as Idr6, Id7 as Idr7, Id8 as Idr8, Id9 as Idr9, Id10 as Idr10,
                    Id11 as Idr11, Id12 as Idr12, Id13 as Idr13, Id14 as Idr14, Id15 as Idr15,
                };
                pub use super::odr::{
                    Od0 as Odr0, Od1 as Odr1, Od2 as Odr2, Od3 as Odr3, Od4 as Odr4, Od5 as Odr5,
                    Od6 as Odr6, Od7 as Odr7, Od8 as Odr8, Od9 as Odr9, Od10 as Odr10,
                    Od11 as Odr11, Od12 as Odr12, Od13 as Odr13, Od14 as Odr14, Od15 as Odr15,
                };
                /// Misspelled register name carried by generations of
                /// device headers.
                pub use super::ospeedr as ospeeder;
            }
        }
    };
}

gpio_port! {
    /// GPIO port A.
    pub mod gpioa => crate::mem::AHB1_BASE + 0x0000;
    moder_reset => 0xA800_0000;
    ospeedr_reset => 0x0C00_0000;
    pupdr_reset => 0x6400_0000;
}

gpio_port! {
    /// GPIO port B.
    pub mod gpiob => crate::mem::AHB1_BASE + 0x0400;
    moder_reset => 0x0000_0280;
    ospeedr_reset => 0x0000_00C0;
    pupdr_reset => 0x0000_0100;
}

gpio_port! {
    /// GPIO port C.
    pub mod gpioc => crate::mem::AHB1_BASE + 0x0800;
    moder_reset => 0x0000_0000;
    ospeedr_reset => 0x0000_0000;
    pupdr_reset => 0x0000_0000;
}

gpio_port! {
    /// GPIO port H.
    pub mod gpioh => crate::mem::AHB1_BASE + 0x1C00;
    moder_reset => 0x0000_0000;
    ospeedr_reset => 0x0000_0000;
    pupdr_reset => 0x0000_0000;
}
