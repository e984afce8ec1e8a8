//! Interrupt vector numbering of the STM32F410.
//!
//! The table matches the hardware vector table ordering exactly, holes
//! included: the interrupt numbers are not contiguous because reserved
//! slots stay reserved. See [`crate::irq`] for the machinery.

crate::vectors! {
    /// The index of all vector tokens of the device.
    pub struct Vectors;
    exceptions {
        /// Non-maskable interrupt.
        -14 NMI => Nmi, nmi;
        /// Memory management fault.
        -12 MemoryManagement => MemoryManagement, memory_management;
        /// Bus fault.
        -11 BusFault => BusFault, bus_fault;
        /// Usage fault.
        -10 UsageFault => UsageFault, usage_fault;
        /// Supervisor call.
        -5 SVCall => SvCall, sv_call;
        /// Debug monitor.
        -4 DebugMonitor => DebugMonitor, debug_monitor;
        /// Pendable request for system service.
        -2 PendSV => PendSv, pend_sv;
        /// System tick timer.
        -1 SysTick => SysTick, sys_tick;
    }
    interrupts {
        /// Window watchdog interrupt.
        0 WWDG => Wwdg, wwdg;
        /// PVD through EXTI line detection interrupt.
        1 PVD => Pvd, pvd;
        /// Tamper and timestamp interrupts through the EXTI line.
        2 TAMP_STAMP => TampStamp, tamp_stamp;
        /// RTC wakeup interrupt through the EXTI line.
        3 RTC_WKUP => RtcWkup, rtc_wkup;
        /// Flash global interrupt.
        4 FLASH => Flash, flash;
        /// RCC global interrupt.
        5 RCC => Rcc, rcc;
        /// EXTI line 0 interrupt.
        6 EXTI0 => Exti0, exti0;
        /// EXTI line 1 interrupt.
        7 EXTI1 => Exti1, exti1;
        /// EXTI line 2 interrupt.
        8 EXTI2 => Exti2, exti2;
        /// EXTI line 3 interrupt.
        9 EXTI3 => Exti3, exti3;
        /// EXTI line 4 interrupt.
        10 EXTI4 => Exti4, exti4;
        /// DMA1 stream 0 global interrupt.
        11 DMA1_STREAM0 => Dma1Stream0, dma1_stream0;
        /// DMA1 stream 1 global interrupt.
        12 DMA1_STREAM1 => Dma1Stream1, dma1_stream1;
        /// DMA1 stream 2 global interrupt.
        13 DMA1_STREAM2 => Dma1Stream2, dma1_stream2;
        /// DMA1 stream 3 global interrupt.
        14 DMA1_STREAM3 => Dma1Stream3, dma1_stream3;
        /// DMA1 stream 4 global interrupt.
        15 DMA1_STREAM4 => Dma1Stream4, dma1_stream4;
        /// DMA1 stream 5 global interrupt.
        16 DMA1_STREAM5 => Dma1Stream5, dma1_stream5;
        /// DMA1 stream 6 global interrupt.
        17 DMA1_STREAM6 => Dma1Stream6, dma1_stream6;
        /// ADC1 global interrupt.
        18 ADC => Adc, adc;
        /// EXTI lines 9..5 interrupt.
        23 EXTI9_5 => Exti9_5, exti9_5;
        /// TIM1 break interrupt and TIM9 global interrupt.
        24 TIM1_BRK_TIM9 => Tim1BrkTim9, tim1_brk_tim9;
        /// TIM1 update interrupt.
        25 TIM1_UP => Tim1Up, tim1_up;
        /// TIM1 trigger and commutation interrupt and TIM11 global
        /// interrupt.
        26 TIM1_TRG_COM_TIM11 => Tim1TrgComTim11, tim1_trg_com_tim11;
        /// TIM1 capture compare interrupt.
        27 TIM1_CC => Tim1Cc, tim1_cc;
        /// I2C1 event interrupt.
        31 I2C1_EV => I2c1Ev, i2c1_ev;
        /// I2C1 error interrupt.
        32 I2C1_ER => I2c1Er, i2c1_er;
        /// I2C2 event interrupt.
        33 I2C2_EV => I2c2Ev, i2c2_ev;
        /// I2C2 error interrupt.
        34 I2C2_ER => I2c2Er, i2c2_er;
        /// SPI1 global interrupt.
        35 SPI1 => Spi1, spi1;
        /// SPI2 global interrupt.
        36 SPI2 => Spi2, spi2;
        /// USART1 global interrupt.
        37 USART1 => Usart1, usart1;
        /// USART2 global interrupt.
        38 USART2 => Usart2, usart2;
        /// EXTI lines 15..10 interrupt.
        40 EXTI15_10 => Exti15_10, exti15_10;
        /// RTC alarms A and B through EXTI line interrupt.
        41 RTC_ALARM => RtcAlarm, rtc_alarm;
        /// DMA1 stream 7 global interrupt.
        47 DMA1_STREAM7 => Dma1Stream7, dma1_stream7;
        /// TIM5 global interrupt.
        50 TIM5 => Tim5, tim5;
        /// TIM6 global interrupt and DAC underrun interrupt.
        54 TIM6_DAC => Tim6Dac, tim6_dac;
        /// DMA2 stream 0 global interrupt.
        56 DMA2_STREAM0 => Dma2Stream0, dma2_stream0;
        /// DMA2 stream 1 global interrupt.
        57 DMA2_STREAM1 => Dma2Stream1, dma2_stream1;
        /// DMA2 stream 2 global interrupt.
        58 DMA2_STREAM2 => Dma2Stream2, dma2_stream2;
        /// DMA2 stream 3 global interrupt.
        59 DMA2_STREAM3 => Dma2Stream3, dma2_stream3;
        /// DMA2 stream 4 global interrupt.
        60 DMA2_STREAM4 => Dma2Stream4, dma2_stream4;
        /// DMA2 stream 5 global interrupt.
        68 DMA2_STREAM5 => Dma2Stream5, dma2_stream5;
        /// DMA2 stream 6 global interrupt.
        69 DMA2_STREAM6 => Dma2Stream6, dma2_stream6;
        /// DMA2 stream 7 global interrupt.
        70 DMA2_STREAM7 => Dma2Stream7, dma2_stream7;
        /// USART6 global interrupt.
        71 USART6 => Usart6, usart6;
        /// RNG global interrupt.
        80 RNG => Rng, rng;
        /// FPU global interrupt.
        81 FPU => Fpu, fpu;
        /// SPI5 global interrupt.
        85 SPI5 => Spi5, spi5;
        /// FMPI2C1 event interrupt.
        95 FMPI2C1_EV => Fmpi2c1Ev, fmpi2c1_ev;
        /// FMPI2C1 error interrupt.
        96 FMPI2C1_ER => Fmpi2c1Er, fmpi2c1_er;
        /// LPTIM1 interrupt.
        97 LPTIM1 => Lptim1, lptim1;
    }
}

/// Documented shared-vector names.
///
/// The hardware routes several logical sources onto one vector; the
/// aliases below are re-exports of the canonical token, so the numbers
/// cannot diverge.
pub mod shared {
    /// TIM6 shares its vector with the DAC underrun interrupt.
    pub use super::Tim6Dac as Tim6;
    /// The DAC underrun interrupt shares its vector with TIM6.
    pub use super::Tim6Dac as Dac;
    /// TIM9 shares its vector with the TIM1 break interrupt.
    pub use super::Tim1BrkTim9 as Tim9;
    /// TIM11 shares its vector with the TIM1 trigger/commutation
    /// interrupt.
    pub use super::Tim1TrgComTim11 as Tim11;
}
