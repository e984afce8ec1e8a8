/// Defines a memory-mapped register.
///
/// Expands to a module containing the zero-sized register token `Reg<T>`
/// with one public field token per bit-field, the value wrapper `Val`, and
/// the access-mode trait implementations; the register token is re-exported
/// under the given alias. Field mask disjointness and width containment are
/// checked at compile time.
///
/// See [the `reg` module level documentation](crate::reg) for the grammar.
#[macro_export]
macro_rules! reg {
    (
        $(#[$reg_attr:meta])*
        pub mod $mod_name:ident => $alias:ident;
        $address:expr; $raw:ident; $reset:expr;
        $($reg_trait:ident)*;
        $(
            $(#[$field_attr:meta])*
            $field_ty:ident => $field:ident { $offset:tt $width:tt $mode:ident $($enum_ty:path)? }
        )*
    ) => {
        $(#[$reg_attr])*
        pub mod $mod_name {
            #[allow(unused_imports)]
            use super::*;

            /// The register token.
            pub struct Reg<Tag: $crate::reg::tag::RegTag> {
                $(
                    $(#[$field_attr])*
                    pub $field: $field_ty<Tag>,
                )*
            }

            impl<Tag: $crate::reg::tag::RegTag> $crate::reg::Reg<Tag> for Reg<Tag> {
                type Val = Val;

                const ADDRESS: usize = $address;
            }

            unsafe impl<Tag: $crate::reg::tag::RegTag> $crate::token::Token for Reg<Tag> {
                #[inline]
                unsafe fn take() -> Self {
                    Self {
                        $($field: $crate::token::Token::take(),)*
                    }
                }
            }

            $($crate::reg!(@reg_trait $reg_trait);)*

            impl Reg<$crate::reg::tag::Uniq> {
                /// Converts the unique token into a shared token.
                #[inline]
                #[must_use]
                pub fn into_shared(self) -> Reg<$crate::reg::tag::Shared> {
                    unsafe { $crate::token::Token::take() }
                }
            }

            impl Reg<$crate::reg::tag::Shared> {
                /// Converts the shared token into a unique token.
                #[inline]
                #[must_use]
                pub fn into_uniq(self) -> Reg<$crate::reg::tag::Uniq> {
                    unsafe { $crate::token::Token::take() }
                }

                /// Converts the shared token into a copyable observer
                /// token. The conversion is final: no owned token for this
                /// register can exist afterwards.
                #[inline]
                #[must_use]
                pub fn into_dup(self) -> Reg<$crate::reg::tag::Dup> {
                    unsafe { $crate::token::Token::take() }
                }
            }

            impl Clone for Reg<$crate::reg::tag::Dup> {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl Copy for Reg<$crate::reg::tag::Dup> {}

            /// The register value.
            #[derive(Clone, Copy, $crate::bitfield::Bitfield)]
            #[bitfield(
                default = $reset
                $(, $field($mode, $offset, $width))*
            )]
            pub struct Val($raw);

            $(
                $(#[$field_attr])*
                pub struct $field_ty<Tag: $crate::reg::tag::RegTag> {
                    _tag: ::core::marker::PhantomData<Tag>,
                }

                impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RegField<Tag>
                    for $field_ty<Tag>
                {
                    type Reg = Reg<Tag>;

                    const OFFSET: usize = $offset;
                    const WIDTH: usize = $width;
                    const MASK: $raw = ((((1 as u64) << $width) - 1) << $offset) as $raw;
                }

                unsafe impl<Tag: $crate::reg::tag::RegTag> $crate::token::Token for $field_ty<Tag> {
                    #[inline]
                    unsafe fn take() -> Self {
                        Self { _tag: ::core::marker::PhantomData }
                    }
                }

                $crate::reg!(@field_kind $field_ty $width);
                $crate::reg!(@field_mode $field_ty $mode);
                $(
                    impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RegFieldEnum<Tag>
                        for $field_ty<Tag>
                    {
                        type Enum = $enum_ty;
                    }
                )?

                impl Clone for $field_ty<$crate::reg::tag::Dup> {
                    #[inline]
                    fn clone(&self) -> Self {
                        *self
                    }
                }

                impl Copy for $field_ty<$crate::reg::tag::Dup> {}
            )*

            const _: () = {
                let union: $raw = 0 $(
                    | <$field_ty<$crate::reg::tag::Shared> as $crate::reg::field::RegField<
                        $crate::reg::tag::Shared,
                    >>::MASK
                )*;
                let ones: u32 = 0 $(
                    + <$field_ty<$crate::reg::tag::Shared> as $crate::reg::field::RegField<
                        $crate::reg::tag::Shared,
                    >>::MASK.count_ones()
                )*;
                assert!(union.count_ones() == ones, "overlapping register fields");
                $(assert!(
                    $offset + $width <= ::core::mem::size_of::<$raw>() * 8,
                    "field exceeds register width",
                );)*
            };
        }

        pub use self::$mod_name::Reg as $alias;
    };
    (@reg_trait RReg) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::RReg<Tag> for Reg<Tag> {}
    };
    (@reg_trait WReg) => {
        impl<Tag: $crate::reg::tag::RegOwned> $crate::reg::WReg<Tag> for Reg<Tag> {}
    };
    (@reg_trait RoReg) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::RoReg<Tag> for Reg<Tag> {}
    };
    (@reg_trait WoReg) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::WoReg<Tag> for Reg<Tag> {}
    };
    (@reg_trait ReadSensitive) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::ReadSensitive<Tag> for Reg<Tag> {}
    };
    (@reg_trait RegBitBand) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::bitband::RegBitBand<Tag> for Reg<Tag> {}

        const _: () = assert!(
            $crate::mem::bit_band_capable(
                <Reg<$crate::reg::tag::Shared> as $crate::reg::Reg<
                    $crate::reg::tag::Shared,
                >>::ADDRESS,
            ),
            "register is outside the bit-band target regions",
        );
    };
    (@field_kind $field_ty:ident 1) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RegFieldBit<Tag> for $field_ty<Tag> {}
    };
    (@field_kind $field_ty:ident $width:tt) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RegFieldBits<Tag> for $field_ty<Tag> {}
    };
    (@field_mode $field_ty:ident r) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RRegField<Tag> for $field_ty<Tag> {}
    };
    (@field_mode $field_ty:ident w) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::WRegField<Tag> for $field_ty<Tag> {}
    };
    (@field_mode $field_ty:ident rw) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RRegField<Tag> for $field_ty<Tag> {}
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::WRegField<Tag> for $field_ty<Tag> {}
    };
    (@field_mode $field_ty:ident w1c) => {
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::RRegField<Tag> for $field_ty<Tag> {}
        impl<Tag: $crate::reg::tag::RegTag> $crate::reg::field::Rw1cRegField<Tag> for $field_ty<Tag> {}
    };
}

/// Declares the documented layout of one peripheral block and checks it at
/// compile time.
///
/// Entries are listed in address order; reserved gaps are stated
/// explicitly as `start..end;`. The layout is rejected at compile time if
/// the offsets are not contiguous, a register address differs from
/// `base + offset`, or an entry exceeds the block span.
#[macro_export]
macro_rules! block {
    (
        $(#[$attr:meta])*
        $vis:vis const $name:ident: $base:expr, $size:expr;
        $($off:tt $(.. $end:tt)? $(=> $reg:ty)?;)*
    ) => {
        $(#[$attr])*
        $vis const $name: $crate::reg::BlockLayout = $crate::reg::BlockLayout {
            name: stringify!($name),
            base: $base,
            size: $size,
            entries: &[
                $($crate::block!(@entry $off $(.. $end)? $(=> $reg)?),)*
            ],
        };

        const _: () = assert!(
            $name.check(),
            concat!("block layout mismatch: ", stringify!($name)),
        );
    };
    (@entry $off:tt => $reg:ty) => {
        $crate::reg::block::reg_entry::<$reg>($off)
    };
    (@entry $start:tt .. $end:tt) => {
        $crate::reg::block::BlockEntry::reserved($start, $end)
    };
}

/// Defines a closed enumeration of the legal values of a multiple-bit
/// register field.
///
/// Out-of-range literals are unrepresentable; computed raw bits go through
/// [`FieldEnum::from_bits`](crate::reg::field::FieldEnum::from_bits) or
/// `TryFrom` and fail with
/// [`UnknownBits`](crate::reg::field::UnknownBits).
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$enum_attr:meta])*
        pub enum $name:ident: $bits:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$enum_attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[repr($bits)]
        pub enum $name {
            $(
                $(#[$variant_attr])*
                $variant = $value,
            )+
        }

        impl $crate::reg::field::FieldEnum for $name {
            type Bits = $bits;

            #[inline]
            fn from_bits(
                bits: $bits,
            ) -> Result<Self, $crate::reg::field::UnknownBits<$bits>> {
                match bits {
                    $(bits if bits == $value => Ok(Self::$variant),)+
                    _ => Err($crate::reg::field::UnknownBits(bits)),
                }
            }

            #[inline]
            fn into_bits(self) -> $bits {
                self as $bits
            }
        }

        impl ::core::convert::TryFrom<$bits> for $name {
            type Error = $crate::reg::field::UnknownBits<$bits>;

            #[inline]
            fn try_from(bits: $bits) -> Result<Self, Self::Error> {
                $crate::reg::field::FieldEnum::from_bits(bits)
            }
        }
    };
}
