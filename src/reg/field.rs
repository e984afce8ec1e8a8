use crate::bitfield::{Bitfield, Bits};
use crate::reg::tag::RegTag;
use crate::reg::{RReg, Reg, RegBits, WoReg};
use crate::token::Token;
use core::ptr::{read_volatile, write_volatile};

/// Register field token.
///
/// A field token is scoped to exactly the declared bits of one field of one
/// register; going through it, the caller cannot accidentally touch
/// neighboring fields.
pub trait RegField<T: RegTag>: Token {
    /// The parent register.
    type Reg: Reg<T>;

    /// The bit offset of the field within the register.
    const OFFSET: usize;

    /// The bit width of the field.
    const WIDTH: usize;

    /// The mask of the field within the register.
    const MASK: RegBits<T, Self::Reg>;
}

/// One-bit register field.
pub trait RegFieldBit<T: RegTag>: RegField<T> {}

/// Multiple-bit register field.
pub trait RegFieldBits<T: RegTag>: RegField<T> {}

/// Register field that can read its value.
pub trait RRegField<T: RegTag>: RegField<T>
where
    Self::Reg: RReg<T>,
{
}

/// Register field that can write its value.
pub trait WRegField<T: RegTag>: RegField<T> {}

/// Write-one-to-clear register field.
///
/// Such a field is cleared by storing its mask through the dedicated
/// write path; zeroes written to the sibling flags leave them intact, so
/// the store never needs a read-modify-write and never loses a flag the
/// hardware sets concurrently.
pub trait Rw1cRegField<T: RegTag>: RegField<T> {}

/// One-bit register field that can read its value.
pub trait RRegFieldBit<T: RegTag>: RegFieldBit<T> + RRegField<T>
where
    Self::Reg: RReg<T>,
{
    /// Reads the state of the bit from `val`.
    fn read(&self, val: &<Self::Reg as Reg<T>>::Val) -> bool;

    /// Reads the state of the bit from the register memory.
    fn read_bit(&self) -> bool;
}

/// One-bit register field that can write its value.
pub trait WRegFieldBit<T: RegTag>: RegFieldBit<T> + WRegField<T> {
    /// Sets the bit in `val`.
    fn set(&self, val: &mut <Self::Reg as Reg<T>>::Val);

    /// Clears the bit in `val`.
    fn clear(&self, val: &mut <Self::Reg as Reg<T>>::Val);

    /// Toggles the bit in `val`.
    fn toggle(&self, val: &mut <Self::Reg as Reg<T>>::Val);
}

/// Multiple-bit register field that can read its value.
pub trait RRegFieldBits<T: RegTag>: RegFieldBits<T> + RRegField<T>
where
    Self::Reg: RReg<T>,
{
    /// Reads the field bits from `val`.
    fn read(&self, val: &<Self::Reg as Reg<T>>::Val) -> RegBits<T, Self::Reg>;

    /// Reads the field bits from the register memory.
    fn read_bits(&self) -> RegBits<T, Self::Reg>;
}

/// Multiple-bit register field that can write its value.
pub trait WRegFieldBits<T: RegTag>: RegFieldBits<T> + WRegField<T> {
    /// Replaces the field bits in `val` by `bits`.
    fn write(&self, val: &mut <Self::Reg as Reg<T>>::Val, bits: RegBits<T, Self::Reg>);
}

/// One-bit field of a write-only register.
///
/// Split set/reset registers consist of such fields; storing the mask of
/// one field affects exactly the hardware state that field names, which
/// makes this path safe for every token tag.
pub trait WoRegFieldBit<T: RegTag>: RegFieldBit<T> + WRegField<T>
where
    Self::Reg: WoReg<T>,
{
    /// Stores the reset value with the bit set to the register memory.
    fn set_bit(&self);
}

/// Multiple-bit field of a write-only register.
pub trait WoRegFieldBits<T: RegTag>: RegFieldBits<T> + WRegField<T>
where
    Self::Reg: WoReg<T>,
{
    /// Stores the reset value with the field replaced by `bits` to the
    /// register memory.
    fn store_bits(&self, bits: RegBits<T, Self::Reg>);
}

/// One-bit write-one-to-clear register field.
pub trait Rw1cRegFieldBit<T: RegTag>: RegFieldBit<T> + Rw1cRegField<T> {
    /// Clears the flag by storing the field mask through the dedicated
    /// write path, without a read-modify-write.
    fn clear_flag(&self);
}

impl<T, F> RRegFieldBit<T> for F
where
    T: RegTag,
    F: RegFieldBit<T> + RRegField<T>,
    F::Reg: RReg<T>,
{
    #[inline]
    fn read(&self, val: &<F::Reg as Reg<T>>::Val) -> bool {
        unsafe { val.read_bit(Bits::from_usize(Self::OFFSET)) }
    }

    #[inline]
    fn read_bit(&self) -> bool {
        let bits =
            unsafe { read_volatile(<F::Reg as Reg<T>>::ADDRESS as *const RegBits<T, F::Reg>) };
        !(bits & Self::MASK).is_zero()
    }
}

impl<T, F> WRegFieldBit<T> for F
where
    T: RegTag,
    F: RegFieldBit<T> + WRegField<T>,
{
    #[inline]
    fn set(&self, val: &mut <F::Reg as Reg<T>>::Val) {
        unsafe { val.set_bit(Bits::from_usize(Self::OFFSET)) };
    }

    #[inline]
    fn clear(&self, val: &mut <F::Reg as Reg<T>>::Val) {
        unsafe { val.clear_bit(Bits::from_usize(Self::OFFSET)) };
    }

    #[inline]
    fn toggle(&self, val: &mut <F::Reg as Reg<T>>::Val) {
        unsafe { val.toggle_bit(Bits::from_usize(Self::OFFSET)) };
    }
}

impl<T, F> RRegFieldBits<T> for F
where
    T: RegTag,
    F: RegFieldBits<T> + RRegField<T>,
    F::Reg: RReg<T>,
{
    #[inline]
    fn read(&self, val: &<F::Reg as Reg<T>>::Val) -> RegBits<T, F::Reg> {
        unsafe { val.read_bits(Bits::from_usize(Self::OFFSET), Bits::from_usize(Self::WIDTH)) }
    }

    #[inline]
    fn read_bits(&self) -> RegBits<T, F::Reg> {
        let bits =
            unsafe { read_volatile(<F::Reg as Reg<T>>::ADDRESS as *const RegBits<T, F::Reg>) };
        unsafe {
            <F::Reg as Reg<T>>::Val::from_bits(bits)
                .read_bits(Bits::from_usize(Self::OFFSET), Bits::from_usize(Self::WIDTH))
        }
    }
}

impl<T, F> WRegFieldBits<T> for F
where
    T: RegTag,
    F: RegFieldBits<T> + WRegField<T>,
{
    #[inline]
    fn write(&self, val: &mut <F::Reg as Reg<T>>::Val, bits: RegBits<T, F::Reg>) {
        unsafe {
            val.write_bits(Bits::from_usize(Self::OFFSET), Bits::from_usize(Self::WIDTH), bits);
        }
    }
}

impl<T, F> WoRegFieldBit<T> for F
where
    T: RegTag,
    F: RegFieldBit<T> + WRegField<T>,
    F::Reg: WoReg<T>,
{
    #[inline]
    fn set_bit(&self) {
        let bits = <<F::Reg as Reg<T>>::Val as Bitfield>::DEFAULT | Self::MASK;
        unsafe { write_volatile(<F::Reg as Reg<T>>::ADDRESS as *mut RegBits<T, F::Reg>, bits) };
    }
}

impl<T, F> WoRegFieldBits<T> for F
where
    T: RegTag,
    F: RegFieldBits<T> + WRegField<T>,
    F::Reg: WoReg<T>,
{
    #[inline]
    fn store_bits(&self, bits: RegBits<T, F::Reg>) {
        let mut val = <F::Reg as Reg<T>>::Val::default_val();
        unsafe {
            val.write_bits(Bits::from_usize(Self::OFFSET), Bits::from_usize(Self::WIDTH), bits);
            write_volatile(<F::Reg as Reg<T>>::ADDRESS as *mut RegBits<T, F::Reg>, val.bits());
        }
    }
}

impl<T, F> Rw1cRegFieldBit<T> for F
where
    T: RegTag,
    F: RegFieldBit<T> + Rw1cRegField<T>,
{
    #[inline]
    fn clear_flag(&self) {
        unsafe {
            write_volatile(<F::Reg as Reg<T>>::ADDRESS as *mut RegBits<T, F::Reg>, Self::MASK);
        }
    }
}

/// A closed set of legal values for a multiple-bit register field.
///
/// Out-of-range literals are unrepresentable; computed raw bits go through
/// [`from_bits`](FieldEnum::from_bits) and fail with a typed error.
pub trait FieldEnum: Sized + Copy + 'static {
    /// The underlying integer type of the owning register.
    type Bits: Bits;

    /// Converts raw `bits` into the enumeration.
    fn from_bits(bits: Self::Bits) -> Result<Self, UnknownBits<Self::Bits>>;

    /// Returns the raw bits of the value.
    fn into_bits(self) -> Self::Bits;
}

/// Raw bits that match no declared value of a [`FieldEnum`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnknownBits<B: Bits>(pub B);

/// Register field with an enumerated set of legal values.
pub trait RegFieldEnum<T: RegTag>: RegFieldBits<T> {
    /// The enumeration type.
    type Enum: FieldEnum<Bits = RegBits<T, Self::Reg>>;
}

/// Enumerated register field that can read its value.
pub trait RRegFieldEnum<T: RegTag>: RegFieldEnum<T> + RRegField<T>
where
    Self::Reg: RReg<T>,
{
    /// Reads the field from `val` as the enumeration.
    fn read_enum(
        &self,
        val: &<Self::Reg as Reg<T>>::Val,
    ) -> Result<Self::Enum, UnknownBits<RegBits<T, Self::Reg>>>;
}

/// Enumerated register field that can write its value.
pub trait WRegFieldEnum<T: RegTag>: RegFieldEnum<T> + WRegField<T> {
    /// Replaces the field bits in `val` by the enumerated `value`.
    fn write_enum(&self, val: &mut <Self::Reg as Reg<T>>::Val, value: Self::Enum);
}

impl<T, F> RRegFieldEnum<T> for F
where
    T: RegTag,
    F: RegFieldEnum<T> + RRegField<T> + RRegFieldBits<T>,
    F::Reg: RReg<T>,
{
    #[inline]
    fn read_enum(
        &self,
        val: &<F::Reg as Reg<T>>::Val,
    ) -> Result<F::Enum, UnknownBits<RegBits<T, F::Reg>>> {
        F::Enum::from_bits(RRegFieldBits::read(self, val))
    }
}

impl<T, F> WRegFieldEnum<T> for F
where
    T: RegTag,
    F: RegFieldEnum<T> + WRegField<T> + WRegFieldBits<T>,
{
    #[inline]
    fn write_enum(&self, val: &mut <F::Reg as Reg<T>>::Val, value: F::Enum) {
        WRegFieldBits::write(self, val, value.into_bits());
    }
}
