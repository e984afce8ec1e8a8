use sial::bitfield::Bitfield;
use sial::map;
use sial::map::gpio::{Mode, Pull};
use sial::reg::block::blocks_disjoint;
use sial::reg::field::{FieldEnum, UnknownBits};
use sial::reg::prelude::*;
use std::mem::size_of;

#[test]
fn regs_index_is_zero_sized() {
    assert_eq!(size_of::<map::Regs>(), 0);
}

#[test]
fn block_layouts_hold() {
    for block in map::BLOCKS {
        assert!(block.check(), "layout mismatch: {}", block.name);
    }
}

#[test]
fn blocks_are_disjoint() {
    assert!(blocks_disjoint(map::BLOCKS));
}

#[test]
fn block_bases_match_the_reference_manual() {
    assert_eq!(<map::gpioa::Moder<Shared> as Reg<Shared>>::ADDRESS, 0x4002_0000);
    assert_eq!(<map::gpiob::Moder<Shared> as Reg<Shared>>::ADDRESS, 0x4002_0400);
    assert_eq!(<map::gpioc::Moder<Shared> as Reg<Shared>>::ADDRESS, 0x4002_0800);
    assert_eq!(<map::gpioh::Moder<Shared> as Reg<Shared>>::ADDRESS, 0x4002_1C00);
    assert_eq!(<map::rcc::Cr<Shared> as Reg<Shared>>::ADDRESS, 0x4002_3800);
    assert_eq!(<map::rcc::Apb1enr<Shared> as Reg<Shared>>::ADDRESS, 0x4002_3840);
    assert_eq!(<map::flash::Acr<Shared> as Reg<Shared>>::ADDRESS, 0x4002_3C00);
    assert_eq!(<map::exti::Pr<Shared> as Reg<Shared>>::ADDRESS, 0x4001_3C14);
    assert_eq!(<map::usart1::Sr<Shared> as Reg<Shared>>::ADDRESS, 0x4001_1000);
    assert_eq!(<map::usart2::Sr<Shared> as Reg<Shared>>::ADDRESS, 0x4000_4400);
    assert_eq!(<map::usart6::Sr<Shared> as Reg<Shared>>::ADDRESS, 0x4001_1400);
    assert_eq!(<map::spi5::Cr1<Shared> as Reg<Shared>>::ADDRESS, 0x4001_5000);
    assert_eq!(<map::i2c1::Cr1<Shared> as Reg<Shared>>::ADDRESS, 0x4000_5400);
    assert_eq!(<map::tim6::Cnt<Shared> as Reg<Shared>>::ADDRESS, 0x4000_1024);
    assert_eq!(<map::dac::Cr<Shared> as Reg<Shared>>::ADDRESS, 0x4000_7400);
    assert_eq!(<map::lptim1::Isr<Shared> as Reg<Shared>>::ADDRESS, 0x4000_2400);
    assert_eq!(<map::stk::Ctrl<Shared> as Reg<Shared>>::ADDRESS, 0xE000_E010);
    assert_eq!(<map::scb::Vtor<Shared> as Reg<Shared>>::ADDRESS, 0xE000_ED08);
}

#[test]
fn legacy_aliases_resolve_to_the_canonical_masks() {
    assert_eq!(<map::gpioa::idr::Id0<Shared> as RegField<Shared>>::MASK, 0x0000_0001);
    assert_eq!(
        <map::gpioa::legacy::Idr0<Shared> as RegField<Shared>>::MASK,
        <map::gpioa::idr::Id0<Shared> as RegField<Shared>>::MASK,
    );
    assert_eq!(
        <map::gpiob::legacy::Odr15<Shared> as RegField<Shared>>::MASK,
        <map::gpiob::odr::Od15<Shared> as RegField<Shared>>::MASK,
    );
    assert_eq!(
        <map::gpioa::legacy::ospeeder::Reg<Shared> as Reg<Shared>>::ADDRESS,
        <map::gpioa::ospeedr::Reg<Shared> as Reg<Shared>>::ADDRESS,
    );
}

#[test]
fn rw_fields_round_trip_independently_of_siblings() {
    let moder = unsafe { map::gpiob::Moder::<Shared>::take() };
    for prior in [0x0000_0000, 0xFFFF_FFFF, 0x0000_0280, 0xA5A5_A5A5] {
        let mut val = unsafe { moder.val_from(prior) };
        moder.moder5.write(&mut val, 0b10);
        assert_eq!(moder.moder5.read(&val), 0b10);
        assert_eq!(val.moder4(), prior >> 8 & 0b11);
        assert_eq!(val.moder6(), prior >> 12 & 0b11);
        assert_eq!(val.bits() & !0x0000_0C00, prior & !0x0000_0C00);
    }
}

#[test]
fn setting_a_set_bit_is_idempotent() {
    let cr = unsafe { map::rcc::Cr::<Shared>::take() };
    let mut once = cr.reset_val();
    cr.hsion.set(&mut once);
    let mut twice = cr.reset_val();
    cr.hsion.set(&mut twice);
    cr.hsion.set(&mut twice);
    assert_eq!(once.bits(), twice.bits());
}

#[test]
fn enumerated_fields_reject_out_of_range_bits() {
    assert_eq!(Pull::from_bits(0b01), Ok(Pull::Up));
    assert_eq!(Pull::from_bits(0b11), Err(UnknownBits(0b11)));
    assert_eq!(Pull::try_from(0b10), Ok(Pull::Down));
    assert!(Pull::try_from(0b11).is_err());
    assert_eq!(map::rcc::SysClk::from_bits(0b11), Err(UnknownBits(0b11)));
    assert_eq!(map::iwdg::Prescaler::from_bits(0b111), Err(UnknownBits(0b111)));
}

#[test]
fn enumerated_fields_round_trip_through_vals() {
    let moder = unsafe { map::gpioa::Moder::<Shared>::take() };
    let mut val = moder.reset_val();
    moder.moder5.write_enum(&mut val, Mode::Alternate);
    assert_eq!(moder.moder5.read_enum(&val), Ok(Mode::Alternate));
    moder.moder5.write_enum(&mut val, Mode::Input);
    assert_eq!(moder.moder5.read_enum(&val), Ok(Mode::Input));
}

#[test]
fn gpio_port_a_reset_values_cover_the_debug_pins() {
    let moder = unsafe { map::gpioa::Moder::<Shared>::take() };
    let val = moder.reset_val();
    assert_eq!(moder.moder13.read_enum(&val), Ok(Mode::Alternate));
    assert_eq!(moder.moder14.read_enum(&val), Ok(Mode::Alternate));
    assert_eq!(moder.moder15.read_enum(&val), Ok(Mode::Alternate));
    assert_eq!(moder.moder0.read_enum(&val), Ok(Mode::Input));
}

#[test]
fn w1c_flags_carry_their_own_masks() {
    assert_eq!(<map::exti::pr::Pr22<Shared> as RegField<Shared>>::MASK, 0x0040_0000);
    assert_eq!(<map::flash::sr::Wrperr<Shared> as RegField<Shared>>::MASK, 0x0000_0010);
    assert_eq!(<map::dac::sr::Dmaudr2<Shared> as RegField<Shared>>::MASK, 0x2000_0000);
}

#[test]
fn bit_band_aliases_map_into_the_alias_window() {
    let od5 = unsafe { map::gpioa::odr::Od5::<Shared>::take() };
    let expected = sial::mem::peripheral_bit_band(0x4002_0014, 5);
    assert_eq!(od5.bit_band_ptr() as usize, expected);
    assert_eq!(expected, 0x4240_0294);
}

#[test]
fn bsrr_set_and_reset_halves_do_not_overlap() {
    let bs: u32 = <map::gpioa::bsrr::Bs7<Shared> as RegField<Shared>>::MASK;
    let br: u32 = <map::gpioa::bsrr::Br7<Shared> as RegField<Shared>>::MASK;
    assert_eq!(bs, 0x0000_0080);
    assert_eq!(br, 0x0080_0000);
    assert_eq!(bs & br, 0);
}
