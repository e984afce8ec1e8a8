//! STM32F410 register map.
//!
//! One module per peripheral block; multi-instance peripherals (GPIO
//! ports, USART, SPI, I2C) define their shared layout once and stamp it
//! per instance. The [`Regs`] index is the root of all register tokens;
//! taking it once at program start and extracting peripheral structs with
//! the `periph_*!` macros is the intended way to distribute ownership.
//!
//! Block address spans are checked pairwise disjoint at compile time, and
//! every block layout re-states its documented offset sequence, reserved
//! gaps included.

pub mod crc;
pub mod dac;
pub mod exti;
pub mod flash;
pub mod gpio;
pub mod i2c;
pub mod irq;
pub mod iwdg;
pub mod lptim1;
pub mod pwr;
pub mod rcc;
pub mod scb;
pub mod spi;
pub mod stk;
pub mod syscfg;
pub mod tim6;
pub mod usart;
pub mod wwdg;

pub use self::gpio::{gpioa, gpiob, gpioc, gpioh};
pub use self::i2c::{i2c1, i2c2};
pub use self::spi::{spi1, spi2, spi5};
pub use self::usart::{usart1, usart2, usart6};

use crate::reg::block::{blocks_disjoint, BlockLayout};

crate::reg::tokens! {
    /// The index of all register tokens of the device.
    ///
    /// At most one instance may ever exist; it is created once with
    /// [`Token::take`](crate::token::Token::take) at the start of the
    /// program, and peripheral tokens are moved out of it with the
    /// `periph_*!` extractor macros.
    pub struct Regs;
    ::sial::map;
    mod GPIOA {
        MODER; OTYPER; OSPEEDR; PUPDR; IDR; ODR; BSRR; LCKR; AFRL; AFRH;
    }
    mod GPIOB {
        MODER; OTYPER; OSPEEDR; PUPDR; IDR; ODR; BSRR; LCKR; AFRL; AFRH;
    }
    mod GPIOC {
        MODER; OTYPER; OSPEEDR; PUPDR; IDR; ODR; BSRR; LCKR; AFRL; AFRH;
    }
    mod GPIOH {
        MODER; OTYPER; OSPEEDR; PUPDR; IDR; ODR; BSRR; LCKR; AFRL; AFRH;
    }
    mod CRC {
        DR; IDR; CR;
    }
    mod RCC {
        CR; PLLCFGR; CFGR; CIR; AHB1RSTR; APB1RSTR; APB2RSTR; AHB1ENR;
        APB1ENR; APB2ENR; AHB1LPENR; APB1LPENR; APB2LPENR; BDCR; CSR;
        SSCGR; DCKCFGR; CKGATENR; DCKCFGR2;
    }
    mod FLASH {
        ACR; KEYR; OPTKEYR; SR; CR; OPTCR; OPTCR1;
    }
    mod EXTI {
        IMR; EMR; RTSR; FTSR; SWIER; PR;
    }
    mod SYSCFG {
        MEMRMP; PMC; EXTICR1; EXTICR2; EXTICR3; EXTICR4; CFGR2; CMPCR; CFGR;
    }
    mod PWR {
        CR; CSR;
    }
    mod IWDG {
        KR; PR; RLR; SR;
    }
    mod WWDG {
        CR; CFR; SR;
    }
    mod USART1 {
        SR; DR; BRR; CR1; CR2; CR3; GTPR;
    }
    mod USART2 {
        SR; DR; BRR; CR1; CR2; CR3; GTPR;
    }
    mod USART6 {
        SR; DR; BRR; CR1; CR2; CR3; GTPR;
    }
    mod SPI1 {
        CR1; CR2; SR; DR; CRCPR; RXCRCR; TXCRCR; I2SCFGR; I2SPR;
    }
    mod SPI2 {
        CR1; CR2; SR; DR; CRCPR; RXCRCR; TXCRCR; I2SCFGR; I2SPR;
    }
    mod SPI5 {
        CR1; CR2; SR; DR; CRCPR; RXCRCR; TXCRCR; I2SCFGR; I2SPR;
    }
    mod I2C1 {
        CR1; CR2; OAR1; OAR2; DR; SR1; SR2; CCR; TRISE; FLTR;
    }
    mod I2C2 {
        CR1; CR2; OAR1; OAR2; DR; SR1; SR2; CCR; TRISE; FLTR;
    }
    mod TIM6 {
        CR1; CR2; DIER; SR; EGR; CNT; PSC; ARR;
    }
    mod DAC {
        CR; SWTRIGR; DHR12R1; DHR12L1; DHR8R1; DHR12R2; DHR12L2; DHR8R2;
        DHR12RD; DHR12LD; DHR8RD; DOR1; DOR2; SR;
    }
    mod LPTIM1 {
        ISR; ICR; IER; CFGR; CR; CMP; ARR; CNT; OR;
    }
    mod STK {
        CTRL; LOAD; VAL; CALIB;
    }
    mod SCB {
        CPUID; ICSR; VTOR; AIRCR; SCR; CCR; SHPR1; SHPR2; SHPR3; SHCSR;
    }
}

/// The documented layouts of every mapped peripheral block.
pub const BLOCKS: &[&BlockLayout] = &[
    &gpioa::LAYOUT,
    &gpiob::LAYOUT,
    &gpioc::LAYOUT,
    &gpioh::LAYOUT,
    &crc::LAYOUT,
    &rcc::LAYOUT,
    &flash::LAYOUT,
    &exti::LAYOUT,
    &syscfg::LAYOUT,
    &pwr::LAYOUT,
    &iwdg::LAYOUT,
    &wwdg::LAYOUT,
    &usart1::LAYOUT,
    &usart2::LAYOUT,
    &usart6::LAYOUT,
    &spi1::LAYOUT,
    &spi2::LAYOUT,
    &spi5::LAYOUT,
    &i2c1::LAYOUT,
    &i2c2::LAYOUT,
    &tim6::LAYOUT,
    &dac::LAYOUT,
    &lptim1::LAYOUT,
    &stk::LAYOUT,
    &scb::LAYOUT,
];

const _: () = assert!(blocks_disjoint(BLOCKS), "peripheral blocks overlap");
