//! Memory-mapped registers prelude.

pub use super::bitband::{RRegFieldBitBand, RegBitBand, WRegFieldBitBand};
pub use super::field::{
    FieldEnum, RRegField, RRegFieldBit, RRegFieldBits, RRegFieldEnum, RegField, RegFieldBit,
    RegFieldBits, RegFieldEnum, Rw1cRegField, Rw1cRegFieldBit, WRegField, WRegFieldBit,
    WRegFieldBits, WRegFieldEnum, WoRegFieldBit, WoRegFieldBits,
};
pub use super::tag::{Dup, RegOwned, RegTag, Shared, Uniq};
pub use super::{RReg, ReadSensitive, Reg, RegBits, RoReg, RwRegUniq, WReg, WoReg};
pub use crate::bitfield::Bitfield;
pub use crate::token::Token;
