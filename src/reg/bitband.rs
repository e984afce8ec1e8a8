use crate::mem;
use crate::reg::field::{RRegField, RegFieldBit, WRegField};
use crate::reg::tag::{RegOwned, RegTag};
use crate::reg::{RReg, Reg, WReg};
use core::ptr::{read_volatile, write_volatile};

/// Register within a bit-band target region.
///
/// Every bit of such a register is aliased by a full word in the bit-band
/// alias window; reading or writing the alias word accesses exactly that
/// bit, atomically with respect to the bus.
pub trait RegBitBand<T: RegTag>: Reg<T> {}

/// One-bit field readable through the bit-band alias.
pub trait RRegFieldBitBand<T: RegTag>: RegFieldBit<T> + RRegField<T>
where
    Self::Reg: RegBitBand<T> + RReg<T>,
{
    /// Reads the state of the bit through the bit-band alias word.
    fn read_bit_band(&self) -> bool;

    /// Returns a constant pointer to the bit-band alias word of the field.
    fn bit_band_ptr(&self) -> *const u32;
}

/// One-bit field writable through the bit-band alias.
///
/// The store is a single word access that the bus applies to one bit, so
/// it cannot lose concurrent hardware updates of sibling bits; it still
/// needs an owned token, because two software writers of the *same* bit
/// would race each other.
pub trait WRegFieldBitBand<T: RegOwned>: RegFieldBit<T> + WRegField<T>
where
    Self::Reg: RegBitBand<T> + WReg<T>,
{
    /// Sets the bit through the bit-band alias word.
    fn set_bit_band(&self);

    /// Clears the bit through the bit-band alias word.
    fn clear_bit_band(&self);

    /// Returns a mutable pointer to the bit-band alias word of the field.
    fn bit_band_mut_ptr(&self) -> *mut u32;
}

impl<T, F> RRegFieldBitBand<T> for F
where
    T: RegTag,
    F: RegFieldBit<T> + RRegField<T>,
    F::Reg: RegBitBand<T> + RReg<T>,
{
    #[inline]
    fn read_bit_band(&self) -> bool {
        unsafe { read_volatile(self.bit_band_ptr()) != 0 }
    }

    #[inline]
    fn bit_band_ptr(&self) -> *const u32 {
        mem::bit_band_alias(<F::Reg as Reg<T>>::ADDRESS, Self::OFFSET) as *const u32
    }
}

impl<T, F> WRegFieldBitBand<T> for F
where
    T: RegOwned,
    F: RegFieldBit<T> + WRegField<T>,
    F::Reg: RegBitBand<T> + WReg<T>,
{
    #[inline]
    fn set_bit_band(&self) {
        unsafe { write_volatile(self.bit_band_mut_ptr(), 1) };
    }

    #[inline]
    fn clear_bit_band(&self) {
        unsafe { write_volatile(self.bit_band_mut_ptr(), 0) };
    }

    #[inline]
    fn bit_band_mut_ptr(&self) -> *mut u32 {
        mem::bit_band_alias(<F::Reg as Reg<T>>::ADDRESS, Self::OFFSET) as *mut u32
    }
}
