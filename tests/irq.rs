use sial::irq::{table_len, vector_slot, vectors_bijective, Vector};
use sial::map::irq;
use std::collections::HashSet;
use std::mem::size_of;

#[test]
fn vectors_index_is_zero_sized() {
    assert_eq!(size_of::<irq::Vectors>(), 0);
}

#[test]
fn numbering_is_bijective() {
    assert!(vectors_bijective(irq::VECTOR_TABLE));
    let mut numbers = HashSet::new();
    let mut names = HashSet::new();
    for &(number, name) in irq::VECTOR_TABLE {
        assert!(numbers.insert(number), "duplicate number {number}");
        assert!(names.insert(name), "duplicate name {name}");
    }
}

#[test]
fn exceptions_are_negative_and_interrupts_are_not() {
    assert_eq!(irq::Nmi::NUMBER, -14);
    assert_eq!(irq::SysTick::NUMBER, -1);
    assert_eq!(irq::Wwdg::NUMBER, 0);
    assert_eq!(irq::Usart1::NUMBER, 37);
    assert_eq!(irq::Lptim1::NUMBER, 97);
}

#[test]
fn slots_match_the_hardware_table() {
    assert_eq!(vector_slot(irq::Nmi::NUMBER), 2);
    assert_eq!(vector_slot(irq::SysTick::NUMBER), 15);
    assert_eq!(vector_slot(irq::Wwdg::NUMBER), 16);
    assert_eq!(vector_slot(irq::Lptim1::NUMBER), 113);
    assert_eq!(irq::VECTOR_TABLE_LEN, 114);
    assert_eq!(table_len(irq::VECTOR_TABLE), irq::VECTOR_TABLE_LEN);
}

#[test]
fn numbering_matches_the_vendor_header() {
    let expected: &[(&str, i16)] = &[
        ("WWDG", 0),
        ("PVD", 1),
        ("TAMP_STAMP", 2),
        ("RTC_WKUP", 3),
        ("FLASH", 4),
        ("RCC", 5),
        ("EXTI0", 6),
        ("ADC", 18),
        ("EXTI9_5", 23),
        ("TIM1_BRK_TIM9", 24),
        ("I2C1_EV", 31),
        ("SPI1", 35),
        ("USART2", 38),
        ("EXTI15_10", 40),
        ("DMA1_STREAM7", 47),
        ("TIM5", 50),
        ("TIM6_DAC", 54),
        ("DMA2_STREAM0", 56),
        ("USART6", 71),
        ("RNG", 80),
        ("FPU", 81),
        ("SPI5", 85),
        ("FMPI2C1_EV", 95),
        ("FMPI2C1_ER", 96),
        ("LPTIM1", 97),
    ];
    for &(name, number) in expected {
        assert!(
            irq::VECTOR_TABLE.contains(&(number, name)),
            "missing vector {name} = {number}",
        );
    }
}

#[test]
fn shared_vectors_alias_the_canonical_token() {
    assert_eq!(irq::shared::Tim6::NUMBER, irq::Tim6Dac::NUMBER);
    assert_eq!(irq::shared::Dac::NUMBER, 54);
    assert_eq!(irq::shared::Tim9::NUMBER, 24);
    assert_eq!(irq::shared::Tim11::NUMBER, 26);
    assert_eq!(irq::shared::Tim6::NAME, "TIM6_DAC");
}
