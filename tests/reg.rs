use sial::reg::prelude::*;
use std::mem::{size_of, size_of_val};

use self::test_reg::Val;

sial::reg! {
    /// Test register.
    pub mod test_reg => TestReg;
    0xDEAD_BEEF; u32; 0xBEEF_CACE;
    RReg WReg;
    /// Test single bit.
    TestBit => test_bit { 0 1 rw }
    /// Test multiple bits.
    TestBits => test_bits { 1 3 rw }
    /// Test read-only bit.
    TestRo => test_ro { 4 1 r }
    /// Test write-only bits.
    TestWo => test_wo { 5 2 w }
}

#[test]
fn reg_tokens_are_zero_sized() {
    assert_eq!(size_of::<TestReg<Uniq>>(), 0);
    assert_eq!(size_of::<TestReg<Shared>>(), 0);
    assert_eq!(size_of::<TestReg<Dup>>(), 0);
}

#[test]
fn val_is_raw_sized() {
    assert_eq!(size_of::<Val>(), 4);
}

#[test]
fn reset_val() {
    let reg = unsafe { TestReg::<Shared>::take() };
    assert_eq!(reg.reset_val().bits(), 0xBEEF_CACE);
}

#[test]
fn field_constants() {
    assert_eq!(<test_reg::TestBit<Shared> as RegField<Shared>>::OFFSET, 0);
    assert_eq!(<test_reg::TestBit<Shared> as RegField<Shared>>::WIDTH, 1);
    assert_eq!(<test_reg::TestBit<Shared> as RegField<Shared>>::MASK, 0x0000_0001);
    assert_eq!(<test_reg::TestBits<Shared> as RegField<Shared>>::MASK, 0x0000_000E);
    assert_eq!(<test_reg::TestWo<Shared> as RegField<Shared>>::MASK, 0x0000_0060);
    assert_eq!(<TestReg<Shared> as Reg<Shared>>::ADDRESS, 0xDEAD_BEEF);
}

#[test]
fn field_tokens_operate_on_vals() {
    let reg = unsafe { TestReg::<Shared>::take() };
    let mut val = reg.reset_val();
    reg.test_bit.set(&mut val);
    assert!(reg.test_bit.read(&val));
    reg.test_bits.write(&mut val, 0b101);
    assert_eq!(reg.test_bits.read(&val), 0b101);
    reg.test_bit.clear(&mut val);
    assert!(!reg.test_bit.read(&val));
    reg.test_bit.toggle(&mut val);
    assert!(reg.test_bit.read(&val));
}

#[test]
fn val_accessors() {
    let reg = unsafe { TestReg::<Shared>::take() };
    let mut val = reg.reset_val();
    val.set_test_bit().write_test_bits(0b011).write_test_wo(0b10);
    assert!(val.test_bit());
    assert_eq!(val.test_bits(), 0b011);
    assert!(!val.test_ro());
}

#[test]
fn tag_conversions_preserve_zero_size() {
    let reg = unsafe { TestReg::<Shared>::take() };
    let reg = reg.into_uniq();
    let reg = reg.into_shared();
    let reg = reg.into_dup();
    let copy = reg;
    assert_eq!(size_of_val(&copy), 0);
    let _ = reg;
}
