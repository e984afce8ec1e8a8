//! Reset and clock control.
//!
//! The enable registers here gate every other peripheral clock: a register
//! block responds on the bus only after its `*EN` bit is set and the
//! documented ready delay has elapsed. That sequencing is a runtime
//! contract on the drivers, not a property this layer can check.

use crate::field_enum;
use crate::reg::tag::Shared;

/// RCC register block base address.
pub const BASE: usize = crate::mem::AHB1_BASE + 0x3800;

field_enum! {
    /// System clock source.
    ///
    /// Three of the four encodings are legal; `0b11` is not allowed.
    pub enum SysClk: u32 {
        /// HSI oscillator.
        Hsi = 0b00,
        /// HSE oscillator.
        Hse = 0b01,
        /// Main PLL.
        Pll = 0b10,
    }
}

field_enum! {
    /// Main PLL division factor for the system clock.
    pub enum Pllp: u32 {
        /// PLL output divided by 2.
        Div2 = 0b00,
        /// PLL output divided by 4.
        Div4 = 0b01,
        /// PLL output divided by 6.
        Div6 = 0b10,
        /// PLL output divided by 8.
        Div8 = 0b11,
    }
}

field_enum! {
    /// AHB prescaler.
    pub enum Hpre: u32 {
        /// System clock not divided.
        Div1 = 0b0000,
        /// System clock divided by 2.
        Div2 = 0b1000,
        /// System clock divided by 4.
        Div4 = 0b1001,
        /// System clock divided by 8.
        Div8 = 0b1010,
        /// System clock divided by 16.
        Div16 = 0b1011,
        /// System clock divided by 64.
        Div64 = 0b1100,
        /// System clock divided by 128.
        Div128 = 0b1101,
        /// System clock divided by 256.
        Div256 = 0b1110,
        /// System clock divided by 512.
        Div512 = 0b1111,
    }
}

field_enum! {
    /// APB prescaler.
    pub enum Ppre: u32 {
        /// AHB clock not divided.
        Div1 = 0b000,
        /// AHB clock divided by 2.
        Div2 = 0b100,
        /// AHB clock divided by 4.
        Div4 = 0b101,
        /// AHB clock divided by 8.
        Div8 = 0b110,
        /// AHB clock divided by 16.
        Div16 = 0b111,
    }
}

crate::reg! {
    /// Clock control register.
    pub mod cr => Cr;
    BASE + 0x00; u32; 0x0000_0081;
    RReg WReg RegBitBand;
    /// Internal high-speed clock enable.
    Hsion => hsion { 0 1 rw }
    /// Internal high-speed clock ready flag.
    Hsirdy => hsirdy { 1 1 r }
    /// Internal high-speed clock trimming.
    Hsitrim => hsitrim { 3 5 rw }
    /// Internal high-speed clock calibration.
    Hsical => hsical { 8 8 r }
    /// HSE clock enable.
    Hseon => hseon { 16 1 rw }
    /// HSE clock ready flag.
    Hserdy => hserdy { 17 1 r }
    /// HSE clock bypass.
    Hsebyp => hsebyp { 18 1 rw }
    /// Clock security system enable.
    Csson => csson { 19 1 rw }
    /// Main PLL enable.
    Pllon => pllon { 24 1 rw }
    /// Main PLL clock ready flag.
    Pllrdy => pllrdy { 25 1 r }
}

crate::reg! {
    /// PLL configuration register.
    pub mod pllcfgr => Pllcfgr;
    BASE + 0x04; u32; 0x7F00_3010;
    RReg WReg;
    /// Division factor for the main PLL input clock.
    Pllm => pllm { 0 6 rw }
    /// Main PLL multiplication factor for VCO.
    Plln => plln { 6 9 rw }
    /// Main PLL division factor for the system clock.
    Pllp => pllp { 16 2 rw crate::map::rcc::Pllp }
    /// Main PLL entry clock source.
    Pllsrc => pllsrc { 22 1 rw }
    /// Main PLL division factor for USB and SDIO clocks.
    Pllq => pllq { 24 4 rw }
    /// Main PLL division factor for I2S and SPDIF clocks.
    Pllr => pllr { 28 3 rw }
}

crate::reg! {
    /// Clock configuration register.
    pub mod cfgr => Cfgr;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg;
    /// System clock switch.
    Sw => sw { 0 2 rw crate::map::rcc::SysClk }
    /// System clock switch status.
    Sws => sws { 2 2 r crate::map::rcc::SysClk }
    /// AHB prescaler.
    Hpre => hpre { 4 4 rw crate::map::rcc::Hpre }
    /// MCO1 output enable.
    Mco1en => mco1en { 8 1 rw }
    /// APB1 low-speed prescaler.
    Ppre1 => ppre1 { 10 3 rw crate::map::rcc::Ppre }
    /// APB2 high-speed prescaler.
    Ppre2 => ppre2 { 13 3 rw crate::map::rcc::Ppre }
    /// HSE division factor for the RTC clock.
    Rtcpre => rtcpre { 16 5 rw }
    /// Microcontroller clock output 1 source.
    Mco1 => mco1 { 21 2 rw }
    /// MCO1 prescaler.
    Mco1pre => mco1pre { 24 3 rw }
    /// MCO2 prescaler.
    Mco2pre => mco2pre { 27 3 rw }
    /// Microcontroller clock output 2 source.
    Mco2 => mco2 { 30 2 rw }
}

crate::reg! {
    /// Clock interrupt register.
    ///
    /// The ready flags are cleared through the dedicated write-only clear
    /// bits in the upper half, never by read-modify-write of the flags.
    pub mod cir => Cir;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg;
    /// LSI ready interrupt flag.
    Lsirdyf => lsirdyf { 0 1 r }
    /// LSE ready interrupt flag.
    Lserdyf => lserdyf { 1 1 r }
    /// HSI ready interrupt flag.
    Hsirdyf => hsirdyf { 2 1 r }
    /// HSE ready interrupt flag.
    Hserdyf => hserdyf { 3 1 r }
    /// Main PLL ready interrupt flag.
    Pllrdyf => pllrdyf { 4 1 r }
    /// Clock security system interrupt flag.
    Cssf => cssf { 7 1 r }
    /// LSI ready interrupt enable.
    Lsirdyie => lsirdyie { 8 1 rw }
    /// LSE ready interrupt enable.
    Lserdyie => lserdyie { 9 1 rw }
    /// HSI ready interrupt enable.
    Hsirdyie => hsirdyie { 10 1 rw }
    /// HSE ready interrupt enable.
    Hserdyie => hserdyie { 11 1 rw }
    /// Main PLL ready interrupt enable.
    Pllrdyie => pllrdyie { 12 1 rw }
    /// LSI ready interrupt clear.
    Lsirdyc => lsirdyc { 16 1 w }
    /// LSE ready interrupt clear.
    Lserdyc => lserdyc { 17 1 w }
    /// HSI ready interrupt clear.
    Hsirdyc => hsirdyc { 18 1 w }
    /// HSE ready interrupt clear.
    Hserdyc => hserdyc { 19 1 w }
    /// Main PLL ready interrupt clear.
    Pllrdyc => pllrdyc { 20 1 w }
    /// Clock security system interrupt clear.
    Cssc => cssc { 23 1 w }
}

crate::reg! {
    /// AHB1 peripheral reset register.
    pub mod ahb1rstr => Ahb1rstr;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// GPIOA reset.
    Gpioarst => gpioarst { 0 1 rw }
    /// GPIOB reset.
    Gpiobrst => gpiobrst { 1 1 rw }
    /// GPIOC reset.
    Gpiocrst => gpiocrst { 2 1 rw }
    /// GPIOH reset.
    Gpiohrst => gpiohrst { 7 1 rw }
    /// CRC reset.
    Crcrst => crcrst { 12 1 rw }
    /// DMA1 reset.
    Dma1rst => dma1rst { 21 1 rw }
    /// DMA2 reset.
    Dma2rst => dma2rst { 22 1 rw }
    /// RNG reset.
    Rngrst => rngrst { 31 1 rw }
}

crate::reg! {
    /// APB1 peripheral reset register.
    pub mod apb1rstr => Apb1rstr;
    BASE + 0x20; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// TIM5 reset.
    Tim5rst => tim5rst { 3 1 rw }
    /// TIM6 reset.
    Tim6rst => tim6rst { 4 1 rw }
    /// LPTIM1 reset.
    Lptim1rst => lptim1rst { 9 1 rw }
    /// Window watchdog reset.
    Wwdgrst => wwdgrst { 11 1 rw }
    /// SPI2 reset.
    Spi2rst => spi2rst { 14 1 rw }
    /// USART2 reset.
    Usart2rst => usart2rst { 17 1 rw }
    /// I2C1 reset.
    I2c1rst => i2c1rst { 21 1 rw }
    /// I2C2 reset.
    I2c2rst => i2c2rst { 22 1 rw }
    /// FMPI2C1 reset.
    Fmpi2c1rst => fmpi2c1rst { 24 1 rw }
    /// Power interface reset.
    Pwrrst => pwrrst { 28 1 rw }
    /// DAC interface reset.
    Dacrst => dacrst { 29 1 rw }
}

crate::reg! {
    /// APB2 peripheral reset register.
    pub mod apb2rstr => Apb2rstr;
    BASE + 0x24; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// TIM1 reset.
    Tim1rst => tim1rst { 0 1 rw }
    /// USART1 reset.
    Usart1rst => usart1rst { 4 1 rw }
    /// USART6 reset.
    Usart6rst => usart6rst { 5 1 rw }
    /// ADC interface reset.
    Adcrst => adcrst { 8 1 rw }
    /// SPI1 reset.
    Spi1rst => spi1rst { 12 1 rw }
    /// System configuration controller reset.
    Syscfgrst => syscfgrst { 14 1 rw }
    /// TIM9 reset.
    Tim9rst => tim9rst { 16 1 rw }
    /// TIM11 reset.
    Tim11rst => tim11rst { 18 1 rw }
    /// SPI5 reset.
    Spi5rst => spi5rst { 20 1 rw }
}

crate::reg! {
    /// AHB1 peripheral clock enable register.
    pub mod ahb1enr => Ahb1enr;
    BASE + 0x30; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// GPIOA clock enable.
    Gpioaen => gpioaen { 0 1 rw }
    /// GPIOB clock enable.
    Gpioben => gpioben { 1 1 rw }
    /// GPIOC clock enable.
    Gpiocen => gpiocen { 2 1 rw }
    /// GPIOH clock enable.
    Gpiohen => gpiohen { 7 1 rw }
    /// CRC clock enable.
    Crcen => crcen { 12 1 rw }
    /// DMA1 clock enable.
    Dma1en => dma1en { 21 1 rw }
    /// DMA2 clock enable.
    Dma2en => dma2en { 22 1 rw }
    /// RNG clock enable.
    Rngen => rngen { 31 1 rw }
}

crate::reg! {
    /// APB1 peripheral clock enable register.
    pub mod apb1enr => Apb1enr;
    BASE + 0x40; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// TIM5 clock enable.
    Tim5en => tim5en { 3 1 rw }
    /// TIM6 clock enable.
    Tim6en => tim6en { 4 1 rw }
    /// LPTIM1 clock enable.
    Lptim1en => lptim1en { 9 1 rw }
    /// RTC APB clock enable.
    Rtcapben => rtcapben { 10 1 rw }
    /// Window watchdog clock enable.
    Wwdgen => wwdgen { 11 1 rw }
    /// SPI2 clock enable.
    Spi2en => spi2en { 14 1 rw }
    /// USART2 clock enable.
    Usart2en => usart2en { 17 1 rw }
    /// I2C1 clock enable.
    I2c1en => i2c1en { 21 1 rw }
    /// I2C2 clock enable.
    I2c2en => i2c2en { 22 1 rw }
    /// FMPI2C1 clock enable.
    Fmpi2c1en => fmpi2c1en { 24 1 rw }
    /// Power interface clock enable.
    Pwren => pwren { 28 1 rw }
    /// DAC interface clock enable.
    Dacen => dacen { 29 1 rw }
}

crate::reg! {
    /// APB2 peripheral clock enable register.
    pub mod apb2enr => Apb2enr;
    BASE + 0x44; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// TIM1 clock enable.
    Tim1en => tim1en { 0 1 rw }
    /// USART1 clock enable.
    Usart1en => usart1en { 4 1 rw }
    /// USART6 clock enable.
    Usart6en => usart6en { 5 1 rw }
    /// ADC1 clock enable.
    Adc1en => adc1en { 8 1 rw }
    /// SPI1 clock enable.
    Spi1en => spi1en { 12 1 rw }
    /// System configuration controller clock enable.
    Syscfgen => syscfgen { 14 1 rw }
    /// EXTI and edge detector clock enable.
    Extiten => extiten { 15 1 rw }
    /// TIM9 clock enable.
    Tim9en => tim9en { 16 1 rw }
    /// TIM11 clock enable.
    Tim11en => tim11en { 18 1 rw }
    /// SPI5 clock enable.
    Spi5en => spi5en { 20 1 rw }
}

crate::reg! {
    /// AHB1 peripheral clock enable in low power mode register.
    pub mod ahb1lpenr => Ahb1lpenr;
    BASE + 0x50; u32; 0x8061_9087;
    RReg WReg;
    /// GPIOA clock enable during Sleep mode.
    Gpioalpen => gpioalpen { 0 1 rw }
    /// GPIOB clock enable during Sleep mode.
    Gpioblpen => gpioblpen { 1 1 rw }
    /// GPIOC clock enable during Sleep mode.
    Gpioclpen => gpioclpen { 2 1 rw }
    /// GPIOH clock enable during Sleep mode.
    Gpiohlpen => gpiohlpen { 7 1 rw }
    /// CRC clock enable during Sleep mode.
    Crclpen => crclpen { 12 1 rw }
    /// Flash interface clock enable during Sleep mode.
    Flitflpen => flitflpen { 15 1 rw }
    /// SRAM1 clock enable during Sleep mode.
    Sram1lpen => sram1lpen { 16 1 rw }
    /// DMA1 clock enable during Sleep mode.
    Dma1lpen => dma1lpen { 21 1 rw }
    /// DMA2 clock enable during Sleep mode.
    Dma2lpen => dma2lpen { 22 1 rw }
    /// RNG clock enable during Sleep mode.
    Rnglpen => rnglpen { 31 1 rw }
}

crate::reg! {
    /// APB1 peripheral clock enable in low power mode register.
    pub mod apb1lpenr => Apb1lpenr;
    BASE + 0x60; u32; 0x3162_4E18;
    RReg WReg;
    /// TIM5 clock enable during Sleep mode.
    Tim5lpen => tim5lpen { 3 1 rw }
    /// TIM6 clock enable during Sleep mode.
    Tim6lpen => tim6lpen { 4 1 rw }
    /// LPTIM1 clock enable during Sleep mode.
    Lptim1lpen => lptim1lpen { 9 1 rw }
    /// RTC APB clock enable during Sleep mode.
    Rtcapblpen => rtcapblpen { 10 1 rw }
    /// Window watchdog clock enable during Sleep mode.
    Wwdglpen => wwdglpen { 11 1 rw }
    /// SPI2 clock enable during Sleep mode.
    Spi2lpen => spi2lpen { 14 1 rw }
    /// USART2 clock enable during Sleep mode.
    Usart2lpen => usart2lpen { 17 1 rw }
    /// I2C1 clock enable during Sleep mode.
    I2c1lpen => i2c1lpen { 21 1 rw }
    /// I2C2 clock enable during Sleep mode.
    I2c2lpen => i2c2lpen { 22 1 rw }
    /// FMPI2C1 clock enable during Sleep mode.
    Fmpi2c1lpen => fmpi2c1lpen { 24 1 rw }
    /// Power interface clock enable during Sleep mode.
    Pwrlpen => pwrlpen { 28 1 rw }
    /// DAC interface clock enable during Sleep mode.
    Daclpen => daclpen { 29 1 rw }
}

crate::reg! {
    /// APB2 peripheral clock enable in low power mode register.
    pub mod apb2lpenr => Apb2lpenr;
    BASE + 0x64; u32; 0x0015_D131;
    RReg WReg;
    /// TIM1 clock enable during Sleep mode.
    Tim1lpen => tim1lpen { 0 1 rw }
    /// USART1 clock enable during Sleep mode.
    Usart1lpen => usart1lpen { 4 1 rw }
    /// USART6 clock enable during Sleep mode.
    Usart6lpen => usart6lpen { 5 1 rw }
    /// ADC1 clock enable during Sleep mode.
    Adc1lpen => adc1lpen { 8 1 rw }
    /// SPI1 clock enable during Sleep mode.
    Spi1lpen => spi1lpen { 12 1 rw }
    /// System configuration controller clock enable during Sleep mode.
    Syscfglpen => syscfglpen { 14 1 rw }
    /// EXTI and edge detector clock enable during Sleep mode.
    Extitlpen => extitlpen { 15 1 rw }
    /// TIM9 clock enable during Sleep mode.
    Tim9lpen => tim9lpen { 16 1 rw }
    /// TIM11 clock enable during Sleep mode.
    Tim11lpen => tim11lpen { 18 1 rw }
    /// SPI5 clock enable during Sleep mode.
    Spi5lpen => spi5lpen { 20 1 rw }
}

crate::reg! {
    /// Backup domain control register.
    pub mod bdcr => Bdcr;
    BASE + 0x70; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// External low-speed oscillator enable.
    Lseon => lseon { 0 1 rw }
    /// External low-speed oscillator ready.
    Lserdy => lserdy { 1 1 r }
    /// External low-speed oscillator bypass.
    Lsebyp => lsebyp { 2 1 rw }
    /// External low-speed oscillator mode.
    Lsemod => lsemod { 3 1 rw }
    /// RTC clock source selection.
    Rtcsel => rtcsel { 8 2 rw }
    /// RTC clock enable.
    Rtcen => rtcen { 15 1 rw }
    /// Backup domain software reset.
    Bdrst => bdrst { 16 1 rw }
}

crate::reg! {
    /// Clock control and status register.
    pub mod csr => Csr;
    BASE + 0x74; u32; 0x0E00_0000;
    RReg WReg RegBitBand;
    /// Internal low-speed oscillator enable.
    Lsion => lsion { 0 1 rw }
    /// Internal low-speed oscillator ready.
    Lsirdy => lsirdy { 1 1 r }
    /// Remove reset flag.
    Rmvf => rmvf { 24 1 rw }
    /// Brown-out reset flag.
    Borrstf => borrstf { 25 1 r }
    /// Pad reset flag.
    Padrstf => padrstf { 26 1 r }
    /// Power-on/power-down reset flag.
    Porrstf => porrstf { 27 1 r }
    /// Software reset flag.
    Sftrstf => sftrstf { 28 1 r }
    /// Independent watchdog reset flag.
    Wdgrstf => wdgrstf { 29 1 r }
    /// Window watchdog reset flag.
    Wwdgrstf => wwdgrstf { 30 1 r }
    /// Low-power reset flag.
    Lpwrrstf => lpwrrstf { 31 1 r }
}

crate::reg! {
    /// Spread spectrum clock generation register.
    pub mod sscgr => Sscgr;
    BASE + 0x80; u32; 0x0000_0000;
    RReg WReg;
    /// Modulation period.
    Modper => modper { 0 13 rw }
    /// Incrementation step.
    Incstep => incstep { 13 15 rw }
    /// Spread select.
    Spreadsel => spreadsel { 30 1 rw }
    /// Spread spectrum modulation enable.
    Sscgen => sscgen { 31 1 rw }
}

crate::reg! {
    /// Dedicated clocks configuration register.
    pub mod dckcfgr => Dckcfgr;
    BASE + 0x8C; u32; 0x0000_0000;
    RReg WReg;
    /// Timers clocks prescaler selection.
    Timpre => timpre { 24 1 rw }
    /// I2S APB clock source selection.
    I2ssrc => i2ssrc { 25 2 rw }
}

crate::reg! {
    /// Clocks gated enable register.
    pub mod ckgatenr => Ckgatenr;
    BASE + 0x90; u32; 0x0000_0000;
    RReg WReg;
    /// AHB to APB1 bridge clock gating.
    Ahb2apb1Cken => ahb2apb1_cken { 0 1 rw }
    /// AHB to APB2 bridge clock gating.
    Ahb2apb2Cken => ahb2apb2_cken { 1 1 rw }
    /// Cortex-M4 debug clock gating.
    Cm4dbgCken => cm4dbg_cken { 2 1 rw }
    /// Spare clock gating.
    SpareCken => spare_cken { 3 1 rw }
    /// SRAM controller clock gating.
    SramCken => sram_cken { 4 1 rw }
    /// Flash interface clock gating.
    FlitfCken => flitf_cken { 5 1 rw }
    /// RCC clock gating.
    RccCken => rcc_cken { 6 1 rw }
}

crate::reg! {
    /// Dedicated clocks configuration register 2.
    pub mod dckcfgr2 => Dckcfgr2;
    BASE + 0x94; u32; 0x0000_0000;
    RReg WReg;
    /// FMPI2C1 kernel clock source selection.
    Fmpi2c1sel => fmpi2c1sel { 22 2 rw }
    /// LPTIM1 kernel clock source selection.
    Lptim1sel => lptim1sel { 30 2 rw }
}

crate::block! {
    /// Documented register layout of the RCC block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Cr<Shared>;
    0x04 => Pllcfgr<Shared>;
    0x08 => Cfgr<Shared>;
    0x0C => Cir<Shared>;
    0x10 => Ahb1rstr<Shared>;
    0x14 .. 0x20;
    0x20 => Apb1rstr<Shared>;
    0x24 => Apb2rstr<Shared>;
    0x28 .. 0x30;
    0x30 => Ahb1enr<Shared>;
    0x34 .. 0x40;
    0x40 => Apb1enr<Shared>;
    0x44 => Apb2enr<Shared>;
    0x48 .. 0x50;
    0x50 => Ahb1lpenr<Shared>;
    0x54 .. 0x60;
    0x60 => Apb1lpenr<Shared>;
    0x64 => Apb2lpenr<Shared>;
    0x68 .. 0x70;
    0x70 => Bdcr<Shared>;
    0x74 => Csr<Shared>;
    0x78 .. 0x80;
    0x80 => Sscgr<Shared>;
    0x84 .. 0x8C;
    0x8C => Dckcfgr<Shared>;
    0x90 => Ckgatenr<Shared>;
    0x94 => Dckcfgr2<Shared>;
}
