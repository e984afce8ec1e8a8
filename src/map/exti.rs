//! External interrupt/event controller.
//!
//! Lines 0..15 come from the GPIO pins through the SYSCFG routing; the
//! upper lines are wired to PVD, RTC, and LPTIM1 events.

use crate::reg::tag::Shared;

/// EXTI register block base address.
pub const BASE: usize = crate::mem::APB2_BASE + 0x3C00;

crate::reg! {
    /// Interrupt mask register.
    pub mod imr => Imr;
    BASE + 0x00; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Interrupt mask on line 0.
    Mr0 => mr0 { 0 1 rw }
    /// Interrupt mask on line 1.
    Mr1 => mr1 { 1 1 rw }
    /// Interrupt mask on line 2.
    Mr2 => mr2 { 2 1 rw }
    /// Interrupt mask on line 3.
    Mr3 => mr3 { 3 1 rw }
    /// Interrupt mask on line 4.
    Mr4 => mr4 { 4 1 rw }
    /// Interrupt mask on line 5.
    Mr5 => mr5 { 5 1 rw }
    /// Interrupt mask on line 6.
    Mr6 => mr6 { 6 1 rw }
    /// Interrupt mask on line 7.
    Mr7 => mr7 { 7 1 rw }
    /// Interrupt mask on line 8.
    Mr8 => mr8 { 8 1 rw }
    /// Interrupt mask on line 9.
    Mr9 => mr9 { 9 1 rw }
    /// Interrupt mask on line 10.
    Mr10 => mr10 { 10 1 rw }
    /// Interrupt mask on line 11.
    Mr11 => mr11 { 11 1 rw }
    /// Interrupt mask on line 12.
    Mr12 => mr12 { 12 1 rw }
    /// Interrupt mask on line 13.
    Mr13 => mr13 { 13 1 rw }
    /// Interrupt mask on line 14.
    Mr14 => mr14 { 14 1 rw }
    /// Interrupt mask on line 15.
    Mr15 => mr15 { 15 1 rw }
    /// Interrupt mask on line 16 (PVD output).
    Mr16 => mr16 { 16 1 rw }
    /// Interrupt mask on line 17 (RTC alarm).
    Mr17 => mr17 { 17 1 rw }
    /// Interrupt mask on line 18.
    Mr18 => mr18 { 18 1 rw }
    /// Interrupt mask on line 19.
    Mr19 => mr19 { 19 1 rw }
    /// Interrupt mask on line 20.
    Mr20 => mr20 { 20 1 rw }
    /// Interrupt mask on line 21 (RTC tamper and timestamp).
    Mr21 => mr21 { 21 1 rw }
    /// Interrupt mask on line 22 (RTC wakeup).
    Mr22 => mr22 { 22 1 rw }
    /// Interrupt mask on line 23 (LPTIM1).
    Mr23 => mr23 { 23 1 rw }
}

crate::reg! {
    /// Event mask register.
    pub mod emr => Emr;
    BASE + 0x04; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Event mask on line 0.
    Mr0 => mr0 { 0 1 rw }
    /// Event mask on line 1.
    Mr1 => mr1 { 1 1 rw }
    /// Event mask on line 2.
    Mr2 => mr2 { 2 1 rw }
    /// Event mask on line 3.
    Mr3 => mr3 { 3 1 rw }
    /// Event mask on line 4.
    Mr4 => mr4 { 4 1 rw }
    /// Event mask on line 5.
    Mr5 => mr5 { 5 1 rw }
    /// Event mask on line 6.
    Mr6 => mr6 { 6 1 rw }
    /// Event mask on line 7.
    Mr7 => mr7 { 7 1 rw }
    /// Event mask on line 8.
    Mr8 => mr8 { 8 1 rw }
    /// Event mask on line 9.
    Mr9 => mr9 { 9 1 rw }
    /// Event mask on line 10.
    Mr10 => mr10 { 10 1 rw }
    /// Event mask on line 11.
    Mr11 => mr11 { 11 1 rw }
    /// Event mask on line 12.
    Mr12 => mr12 { 12 1 rw }
    /// Event mask on line 13.
    Mr13 => mr13 { 13 1 rw }
    /// Event mask on line 14.
    Mr14 => mr14 { 14 1 rw }
    /// Event mask on line 15.
    Mr15 => mr15 { 15 1 rw }
    /// Event mask on line 16.
    Mr16 => mr16 { 16 1 rw }
    /// Event mask on line 17.
    Mr17 => mr17 { 17 1 rw }
    /// Event mask on line 18.
    Mr18 => mr18 { 18 1 rw }
    /// Event mask on line 19.
    Mr19 => mr19 { 19 1 rw }
    /// Event mask on line 20.
    Mr20 => mr20 { 20 1 rw }
    /// Event mask on line 21.
    Mr21 => mr21 { 21 1 rw }
    /// Event mask on line 22.
    Mr22 => mr22 { 22 1 rw }
    /// Event mask on line 23.
    Mr23 => mr23 { 23 1 rw }
}

crate::reg! {
    /// Rising trigger selection register.
    pub mod rtsr => Rtsr;
    BASE + 0x08; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Rising trigger event configuration of line 0.
    Tr0 => tr0 { 0 1 rw }
    /// Rising trigger event configuration of line 1.
    Tr1 => tr1 { 1 1 rw }
    /// Rising trigger event configuration of line 2.
    Tr2 => tr2 { 2 1 rw }
    /// Rising trigger event configuration of line 3.
    Tr3 => tr3 { 3 1 rw }
    /// Rising trigger event configuration of line 4.
    Tr4 => tr4 { 4 1 rw }
    /// Rising trigger event configuration of line 5.
    Tr5 => tr5 { 5 1 rw }
    /// Rising trigger event configuration of line 6.
    Tr6 => tr6 { 6 1 rw }
    /// Rising trigger event configuration of line 7.
    Tr7 => tr7 { 7 1 rw }
    /// Rising trigger event configuration of line 8.
    Tr8 => tr8 { 8 1 rw }
    /// Rising trigger event configuration of line 9.
    Tr9 => tr9 { 9 1 rw }
    /// Rising trigger event configuration of line 10.
    Tr10 => tr10 { 10 1 rw }
    /// Rising trigger event configuration of line 11.
    Tr11 => tr11 { 11 1 rw }
    /// Rising trigger event configuration of line 12.
    Tr12 => tr12 { 12 1 rw }
    /// Rising trigger event configuration of line 13.
    Tr13 => tr13 { 13 1 rw }
    /// Rising trigger event configuration of line 14.
    Tr14 => tr14 { 14 1 rw }
    /// Rising trigger event configuration of line 15.
    Tr15 => tr15 { 15 1 rw }
    /// Rising trigger event configuration of line 16.
    Tr16 => tr16 { 16 1 rw }
    /// Rising trigger event configuration of line 17.
    Tr17 => tr17 { 17 1 rw }
    /// Rising trigger event configuration of line 18.
    Tr18 => tr18 { 18 1 rw }
    /// Rising trigger event configuration of line 19.
    Tr19 => tr19 { 19 1 rw }
    /// Rising trigger event configuration of line 20.
    Tr20 => tr20 { 20 1 rw }
    /// Rising trigger event configuration of line 21.
    Tr21 => tr21 { 21 1 rw }
    /// Rising trigger event configuration of line 22.
    Tr22 => tr22 { 22 1 rw }
    /// Rising trigger event configuration of line 23.
    Tr23 => tr23 { 23 1 rw }
}

crate::reg! {
    /// Falling trigger selection register.
    pub mod ftsr => Ftsr;
    BASE + 0x0C; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Falling trigger event configuration of line 0.
    Tr0 => tr0 { 0 1 rw }
    /// Falling trigger event configuration of line 1.
    Tr1 => tr1 { 1 1 rw }
    /// Falling trigger event configuration of line 2.
    Tr2 => tr2 { 2 1 rw }
    /// Falling trigger event configuration of line 3.
    Tr3 => tr3 { 3 1 rw }
    /// Falling trigger event configuration of line 4.
    Tr4 => tr4 { 4 1 rw }
    /// Falling trigger event configuration of line 5.
    Tr5 => tr5 { 5 1 rw }
    /// Falling trigger event configuration of line 6.
    Tr6 => tr6 { 6 1 rw }
    /// Falling trigger event configuration of line 7.
    Tr7 => tr7 { 7 1 rw }
    /// Falling trigger event configuration of line 8.
    Tr8 => tr8 { 8 1 rw }
    /// Falling trigger event configuration of line 9.
    Tr9 => tr9 { 9 1 rw }
    /// Falling trigger event configuration of line 10.
    Tr10 => tr10 { 10 1 rw }
    /// Falling trigger event configuration of line 11.
    Tr11 => tr11 { 11 1 rw }
    /// Falling trigger event configuration of line 12.
    Tr12 => tr12 { 12 1 rw }
    /// Falling trigger event configuration of line 13.
    Tr13 => tr13 { 13 1 rw }
    /// Falling trigger event configuration of line 14.
    Tr14 => tr14 { 14 1 rw }
    /// Falling trigger event configuration of line 15.
    Tr15 => tr15 { 15 1 rw }
    /// Falling trigger event configuration of line 16.
    Tr16 => tr16 { 16 1 rw }
    /// Falling trigger event configuration of line 17.
    Tr17 => tr17 { 17 1 rw }
    /// Falling trigger event configuration of line 18.
    Tr18 => tr18 { 18 1 rw }
    /// Falling trigger event configuration of line 19.
    Tr19 => tr19 { 19 1 rw }
    /// Falling trigger event configuration of line 20.
    Tr20 => tr20 { 20 1 rw }
    /// Falling trigger event configuration of line 21.
    Tr21 => tr21 { 21 1 rw }
    /// Falling trigger event configuration of line 22.
    Tr22 => tr22 { 22 1 rw }
    /// Falling trigger event configuration of line 23.
    Tr23 => tr23 { 23 1 rw }
}

crate::reg! {
    /// Software interrupt event register.
    pub mod swier => Swier;
    BASE + 0x10; u32; 0x0000_0000;
    RReg WReg RegBitBand;
    /// Software interrupt on line 0.
    Swier0 => swier0 { 0 1 rw }
    /// Software interrupt on line 1.
    Swier1 => swier1 { 1 1 rw }
    /// Software interrupt on line 2.
    Swier2 => swier2 { 2 1 rw }
    /// Software interrupt on line 3.
    Swier3 => swier3 { 3 1 rw }
    /// Software interrupt on line 4.
    Swier4 => swier4 { 4 1 rw }
    /// Software interrupt on line 5.
    Swier5 => swier5 { 5 1 rw }
    /// Software interrupt on line 6.
    Swier6 => swier6 { 6 1 rw }
    /// Software interrupt on line 7.
    Swier7 => swier7 { 7 1 rw }
    /// Software interrupt on line 8.
    Swier8 => swier8 { 8 1 rw }
    /// Software interrupt on line 9.
    Swier9 => swier9 { 9 1 rw }
    /// Software interrupt on line 10.
    Swier10 => swier10 { 10 1 rw }
    /// Software interrupt on line 11.
    Swier11 => swier11 { 11 1 rw }
    /// Software interrupt on line 12.
    Swier12 => swier12 { 12 1 rw }
    /// Software interrupt on line 13.
    Swier13 => swier13 { 13 1 rw }
    /// Software interrupt on line 14.
    Swier14 => swier14 { 14 1 rw }
    /// Software interrupt on line 15.
    Swier15 => swier15 { 15 1 rw }
    /// Software interrupt on line 16.
    Swier16 => swier16 { 16 1 rw }
    /// Software interrupt on line 17.
    Swier17 => swier17 { 17 1 rw }
    /// Software interrupt on line 18.
    Swier18 => swier18 { 18 1 rw }
    /// Software interrupt on line 19.
    Swier19 => swier19 { 19 1 rw }
    /// Software interrupt on line 20.
    Swier20 => swier20 { 20 1 rw }
    /// Software interrupt on line 21.
    Swier21 => swier21 { 21 1 rw }
    /// Software interrupt on line 22.
    Swier22 => swier22 { 22 1 rw }
    /// Software interrupt on line 23.
    Swier23 => swier23 { 23 1 rw }
}

crate::reg! {
    /// Pending register.
    ///
    /// Every flag is write-one-to-clear; pending lines are acknowledged
    /// through [`clear_flag`](crate::reg::field::Rw1cRegFieldBit::clear_flag),
    /// which stores only the flag's own mask and therefore cannot drop a
    /// line the hardware raises concurrently.
    pub mod pr => Pr;
    BASE + 0x14; u32; 0x0000_0000;
    RReg WReg;
    /// Pending bit for line 0.
    Pr0 => pr0 { 0 1 w1c }
    /// Pending bit for line 1.
    Pr1 => pr1 { 1 1 w1c }
    /// Pending bit for line 2.
    Pr2 => pr2 { 2 1 w1c }
    /// Pending bit for line 3.
    Pr3 => pr3 { 3 1 w1c }
    /// Pending bit for line 4.
    Pr4 => pr4 { 4 1 w1c }
    /// Pending bit for line 5.
    Pr5 => pr5 { 5 1 w1c }
    /// Pending bit for line 6.
    Pr6 => pr6 { 6 1 w1c }
    /// Pending bit for line 7.
    Pr7 => pr7 { 7 1 w1c }
    /// Pending bit for line 8.
    Pr8 => pr8 { 8 1 w1c }
    /// Pending bit for line 9.
    Pr9 => pr9 { 9 1 w1c }
    /// Pending bit for line 10.
    Pr10 => pr10 { 10 1 w1c }
    /// Pending bit for line 11.
    Pr11 => pr11 { 11 1 w1c }
    /// Pending bit for line 12.
    Pr12 => pr12 { 12 1 w1c }
    /// Pending bit for line 13.
    Pr13 => pr13 { 13 1 w1c }
    /// Pending bit for line 14.
    Pr14 => pr14 { 14 1 w1c }
    /// Pending bit for line 15.
    Pr15 => pr15 { 15 1 w1c }
    /// Pending bit for line 16.
    Pr16 => pr16 { 16 1 w1c }
    /// Pending bit for line 17.
    Pr17 => pr17 { 17 1 w1c }
    /// Pending bit for line 18.
    Pr18 => pr18 { 18 1 w1c }
    /// Pending bit for line 19.
    Pr19 => pr19 { 19 1 w1c }
    /// Pending bit for line 20.
    Pr20 => pr20 { 20 1 w1c }
    /// Pending bit for line 21.
    Pr21 => pr21 { 21 1 w1c }
    /// Pending bit for line 22.
    Pr22 => pr22 { 22 1 w1c }
    /// Pending bit for line 23.
    Pr23 => pr23 { 23 1 w1c }
}

crate::block! {
    /// Documented register layout of the EXTI block.
    pub const LAYOUT: BASE, 0x400;
    0x00 => Imr<Shared>;
    0x04 => Emr<Shared>;
    0x08 => Rtsr<Shared>;
    0x0C => Ftsr<Shared>;
    0x10 => Swier<Shared>;
    0x14 => Pr<Shared>;
}
