use crate::bitfield::Bitfield;
use crate::reg::tag::{RegOwned, RegTag, Uniq};
use crate::token::Token;
use core::ptr::{read_volatile, write_volatile};

/// Disambiguation for the raw integer type behind a register value.
pub type RegBits<T, R> = <<R as Reg<T>>::Val as Bitfield>::Bits;

/// Memory-mapped register token.
///
/// Types implementing this trait are zero-sized; the only data is the
/// `ADDRESS` constant fixed by the silicon. The [`as_ptr`](RReg::as_ptr)
/// and [`as_mut_ptr`](WReg::as_mut_ptr) methods are the single audited
/// place where a numeric address becomes a pointer; no other code performs
/// raw address arithmetic.
pub trait Reg<T: RegTag>: Token {
    /// The register value wrapper.
    type Val: Bitfield;

    /// The memory address of the register.
    const ADDRESS: usize;

    /// Creates a value wrapper initialized to the documented reset value.
    #[inline]
    fn reset_val(&self) -> Self::Val {
        Self::Val::default_val()
    }

    /// Wraps the raw `bits`.
    ///
    /// # Safety
    ///
    /// `bits` must be valid for the register semantics; reserved bits must
    /// keep their reset state.
    #[inline]
    unsafe fn val_from(&self, bits: <Self::Val as Bitfield>::Bits) -> Self::Val {
        Self::Val::from_bits(bits)
    }
}

/// Register that can read its value.
pub trait RReg<T: RegTag>: Reg<T> {
    /// Reads and wraps the register value from its memory address.
    #[inline]
    fn load(&self) -> Self::Val {
        unsafe { Self::Val::from_bits(self.load_bits()) }
    }

    /// Reads the raw register value from its memory address.
    #[inline]
    fn load_bits(&self) -> RegBits<T, Self> {
        unsafe { read_volatile(self.as_ptr()) }
    }

    /// Returns a constant pointer to the register memory.
    #[inline]
    fn as_ptr(&self) -> *const RegBits<T, Self> {
        Self::ADDRESS as *const RegBits<T, Self>
    }
}

/// Register that can write its value.
///
/// Stores require an owned token; copyable observer tokens write only
/// through the dedicated hardware-atomic field paths.
pub trait WReg<T: RegOwned>: Reg<T> {
    /// Passes a value initialized to the reset state to the closure `f`,
    /// then writes the result to the register memory.
    #[inline]
    fn store<F>(&self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.reset_val();
        f(&mut val);
        self.store_val(val);
    }

    /// Writes the wrapped value `val` to the register memory.
    #[inline]
    fn store_val(&self, val: Self::Val) {
        unsafe { write_volatile(self.as_mut_ptr(), val.bits()) };
    }

    /// Writes the documented reset value to the register memory.
    #[inline]
    fn store_reset(&self) {
        self.store_val(self.reset_val());
    }

    /// Writes the raw `bits` to the register memory.
    ///
    /// # Safety
    ///
    /// `bits` must be valid for the register semantics; reserved bits must
    /// keep their reset state.
    #[inline]
    unsafe fn store_bits(&self, bits: RegBits<T, Self>) {
        write_volatile(self.as_mut_ptr(), bits);
    }

    /// Returns a mutable pointer to the register memory.
    #[inline]
    fn as_mut_ptr(&self) -> *mut RegBits<T, Self> {
        Self::ADDRESS as *mut RegBits<T, Self>
    }
}

/// Read-only register.
pub trait RoReg<T: RegTag>: RReg<T> {}

/// Write-only register.
///
/// Reading a write-only register is undefined hardware behavior; no read
/// path exists for these tokens.
pub trait WoReg<T: RegTag>: Reg<T> {}

/// Register whose read access has hardware side effects, e.g.
/// status-clear-on-read data registers. The marker records the identity of
/// such registers; polling loops must account for it.
pub trait ReadSensitive<T: RegTag>: RReg<T> {}

/// Read-write register held by the unique token.
///
/// Read-modify-write sequences are not atomic with respect to interrupts
/// or other execution contexts; the `Uniq` tag proves this token is the
/// only live handle, which makes the sequence sound in a single context.
/// Callers running concurrently with interrupt handlers that touch the
/// same register remain responsible for masking those interrupts.
pub trait RwRegUniq: RReg<Uniq> + WReg<Uniq> {
    /// Reads the register value, passes it to the closure `f`, then writes
    /// the result back to the register memory.
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val;
}

impl<R> RwRegUniq for R
where
    R: RReg<Uniq> + WReg<Uniq>,
{
    #[inline]
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.load();
        f(&mut val);
        self.store_val(val);
    }
}
