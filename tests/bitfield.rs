use sial::bitfield::Bitfield;

#[derive(Bitfield, Copy, Clone)]
#[bitfield(
    default = 0b0100_0000,
    foo(rw, 0, 1, "Test read-write bit."),
    bar(r, 1, 2, "Test read-only bits."),
    baz(w, 3, 3, "Test write-only bits."),
    qux(w1c, 6, "Test write-one-to-clear bit.")
)]
pub struct Byte(u8);

#[test]
fn default_value() {
    let x = Byte::default_val();
    assert_eq!(x.bits(), 0b0100_0000);
    assert!(x.qux());
}

#[test]
fn bit_accessors() {
    let mut x = Byte(0b1111_0100);
    assert!(!x.foo());
    x.set_foo();
    assert!(x.foo());
    x.toggle_foo();
    assert!(!x.foo());
    x.set_foo();
    x.clear_foo();
    assert!(!x.foo());
    assert_eq!(x.bar(), 0b10);
    x.write_baz(0b101);
    assert_eq!(x.bits(), 0b1110_1100);
}

#[test]
fn raw_bit_ops() {
    let mut x = Byte(0b1010_1010);
    assert!(!unsafe { x.read_bit(0) });
    assert!(unsafe { x.read_bit(1) });
    unsafe {
        x.set_bit(0);
        x.clear_bit(1);
        x.toggle_bit(7);
        x.write_bit(3, false);
        x.write_bit(4, true);
    }
    assert_eq!(x.bits(), 0b0011_0001);
}

#[test]
fn raw_bits_ops() {
    let x = Byte(0b1010_0110);
    assert_eq!(unsafe { x.read_bits(0, 4) }, 0b0110);
    assert_eq!(unsafe { x.read_bits(4, 4) }, 0b1010);
    assert_eq!(unsafe { x.read_bits(0, 8) }, 0b1010_0110);
    let mut x = Byte(0b1010_0110);
    unsafe { x.write_bits(2, 4, 0b1001) };
    assert_eq!(x.bits(), 0b1010_0110 & !0b0011_1100 | 0b1001 << 2);
    let mut x = Byte(0b1010_0110);
    unsafe { x.write_bits(0, 8, 0b0101_1001) };
    assert_eq!(x.bits(), 0b0101_1001);
}

#[test]
fn sibling_fields_are_untouched() {
    let mut x = Byte(0b1111_1111);
    x.write_baz(0b000);
    assert!(x.foo());
    assert_eq!(x.bar(), 0b11);
    assert!(x.qux());
    assert_eq!(x.bits(), 0b1100_0111);
}
