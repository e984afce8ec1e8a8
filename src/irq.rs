//! Interrupt vector numbering.
//!
//! One canonical total ordering of every exception and interrupt source of
//! the device: core exceptions carry negative numbers, peripheral
//! interrupt lines carry numbers from zero up, matching the hardware
//! vector table ordering exactly. The numbering is consumed both by the
//! vector table (via [`vector_slot`]) and by interrupt priority
//! management; it is defined once, with the [`vectors!`](crate::vectors)
//! macro, and checked for bijectivity at compile time.
//!
//! Where the hardware itself routes two logical sources onto one vector
//! (e.g. TIM6 and the DAC), a single canonical token exists and the other
//! name is a documented re-export of it.

use crate::token::Token;

/// An exception or interrupt vector token.
pub trait Vector: Token {
    /// The vector number: negative for core exceptions, zero or above for
    /// peripheral interrupt lines.
    const NUMBER: i16;

    /// The canonical symbolic name of the vector.
    const NAME: &'static str;
}

/// A core exception vector; [`NUMBER`](Vector::NUMBER) is negative.
pub trait Exception: Vector {}

/// A peripheral interrupt vector; [`NUMBER`](Vector::NUMBER) is zero or
/// above.
pub trait Interrupt: Vector {}

/// Maps a vector number to its slot in the hardware vector table.
///
/// Slot 0 holds the initial stack pointer and slot 1 the reset handler;
/// the first numbered vector, NMI at `-14`, lands in slot 2.
#[must_use]
pub const fn vector_slot(number: i16) -> usize {
    (number + 16) as usize
}

/// Returns the number of slots a vector table needs to cover `table`,
/// the initial stack pointer slot included.
#[must_use]
pub const fn table_len(table: &[(i16, &str)]) -> usize {
    let mut max = -16;
    let mut i = 0;
    while i < table.len() {
        if table[i].0 > max {
            max = table[i].0;
        }
        i += 1;
    }
    vector_slot(max) + 1
}

/// Returns `true` if no two entries of `table` share a vector number.
#[must_use]
pub const fn vectors_bijective(table: &[(i16, &str)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].0 == table[j].0 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Defines the exception and interrupt vector tokens of the device.
///
/// Expands to one zero-sized token type per vector, the index struct over
/// all of them, and the `VECTOR_TABLE` constant with its compile-time
/// bijectivity check.
#[macro_export]
macro_rules! vectors {
    (
        $(#[$index_attr:meta])*
        pub struct $index:ident;
        exceptions {
            $(
                $(#[$exc_attr:meta])*
                $exc_num:literal $exc_name:ident => $exc_ty:ident, $exc_field:ident;
            )*
        }
        interrupts {
            $(
                $(#[$int_attr:meta])*
                $int_num:literal $int_name:ident => $int_ty:ident, $int_field:ident;
            )*
        }
    ) => {
        $(
            $(#[$exc_attr])*
            pub struct $exc_ty {
                _priv: (),
            }

            unsafe impl $crate::token::Token for $exc_ty {
                #[inline]
                unsafe fn take() -> Self {
                    Self { _priv: () }
                }
            }

            impl $crate::irq::Vector for $exc_ty {
                const NUMBER: i16 = $exc_num;
                const NAME: &'static str = stringify!($exc_name);
            }

            impl $crate::irq::Exception for $exc_ty {}

            const _: () = assert!(
                $exc_num < 0,
                concat!("exception number is not negative: ", stringify!($exc_name)),
            );
        )*

        $(
            $(#[$int_attr])*
            pub struct $int_ty {
                _priv: (),
            }

            unsafe impl $crate::token::Token for $int_ty {
                #[inline]
                unsafe fn take() -> Self {
                    Self { _priv: () }
                }
            }

            impl $crate::irq::Vector for $int_ty {
                const NUMBER: i16 = $int_num;
                const NAME: &'static str = stringify!($int_name);
            }

            impl $crate::irq::Interrupt for $int_ty {}

            const _: () = assert!(
                $int_num >= 0,
                concat!("interrupt number is negative: ", stringify!($int_name)),
            );
        )*

        $(#[$index_attr])*
        pub struct $index {
            $(
                #[doc = concat!("The ", stringify!($exc_name), " vector token.")]
                pub $exc_field: $exc_ty,
            )*
            $(
                #[doc = concat!("The ", stringify!($int_name), " vector token.")]
                pub $int_field: $int_ty,
            )*
        }

        unsafe impl $crate::token::Token for $index {
            #[inline]
            unsafe fn take() -> Self {
                Self {
                    $($exc_field: $crate::token::Token::take(),)*
                    $($int_field: $crate::token::Token::take(),)*
                }
            }
        }

        /// Number and symbolic name of every vector, in declaration order.
        pub const VECTOR_TABLE: &[(i16, &'static str)] = &[
            $(($exc_num, stringify!($exc_name)),)*
            $(($int_num, stringify!($int_name)),)*
        ];

        const _: () = assert!(
            $crate::irq::vectors_bijective(VECTOR_TABLE),
            "two vectors share a number",
        );

        /// Number of slots a full vector table occupies, the initial stack
        /// pointer slot included.
        pub const VECTOR_TABLE_LEN: usize = $crate::irq::table_len(VECTOR_TABLE);
    };
}
