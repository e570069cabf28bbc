//! Integer storage for flag masks.

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// Primitive integer usable as a flag mask.
///
/// Implemented for every built-in integer type. Signed types are treated as
/// plain bit patterns: the sign bit is an ordinary flag bit.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// No bits set.
    const ZERO: Self;

    /// Only the lowest bit set.
    const ONE: Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Shift left by one. The top bit falls off, so shifting the highest
    /// single bit yields `ZERO`.
    fn shift_up(self) -> Self;

    /// All bits strictly below a single-bit value.
    ///
    /// `below(ZERO)` is all ones.
    fn below(self) -> Self;
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {
        $(
            impl Bits for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn shift_up(self) -> Self {
                    self << 1
                }

                #[inline]
                fn below(self) -> Self {
                    self.wrapping_sub(1)
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::Bits;

    #[test]
    fn shift_up_drops_top_bit() {
        assert_eq!(0x80u8.shift_up(), 0);
        assert_eq!(i8::MIN.shift_up(), 0);
        assert_eq!((1u128 << 127).shift_up(), 0);
        assert_eq!(0x40i8.shift_up(), i8::MIN);
    }

    #[test]
    fn below_single_bit() {
        assert_eq!(Bits::below(8u16), 0b111);
        assert_eq!(Bits::below(1u16), 0);
        assert_eq!(Bits::below(i8::MIN), i8::MAX);
    }

    #[test]
    fn count_ones_full_width() {
        assert_eq!(Bits::count_ones(u64::MAX), 64);
        assert_eq!(Bits::count_ones(-1i32), 32);
        assert_eq!(Bits::count_ones(0u8), 0);
    }
}
