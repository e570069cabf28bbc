//! Traversal of the set bits of a mask.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::bits::Bits;
use crate::flags::Flags;
use crate::names::FlagNames;

/// Cursor over the set bits of a mask, lowest bit first.
///
/// Holds its own copy of the mask, so any number of iterators over the same
/// set advance independently, and mutating the set afterwards does not
/// affect an iterator already created.
///
/// Besides [`Iterator`], the cursor can be driven explicitly:
///
/// ```
/// use nexus_flags::{Flags, Iter};
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u8)]
/// enum Io {
///     Read = 2,
///     Write = 8,
/// }
///
/// let mut it = Iter::<Io>::new(0b1010);
/// assert_eq!(it.current_key(), 2);
/// assert_eq!(it.current(), "Read");
/// it.advance();
/// assert_eq!(it.current_key(), 8);
/// it.advance();
/// assert!(!it.has_current());
///
/// it.rewind();
/// assert_eq!(it.current_key(), 2);
/// ```
pub struct Iter<F: Flags> {
    mask: F::Bits,
    cursor: F::Bits,
    _vocabulary: PhantomData<fn() -> F>,
}

impl<F: Flags> Iter<F> {
    /// Starts a traversal of `mask`, positioned on its lowest set bit.
    pub fn new(mask: F::Bits) -> Self {
        let mut iter = Self {
            mask,
            cursor: F::Bits::ZERO,
            _vocabulary: PhantomData,
        };
        iter.rewind();
        iter
    }

    /// Mask being traversed.
    #[inline]
    pub fn mask(&self) -> F::Bits {
        self.mask
    }

    /// Moves back to the lowest set bit. A zero mask is exhausted
    /// immediately.
    pub fn rewind(&mut self) {
        if self.mask == F::Bits::ZERO {
            self.cursor = F::Bits::ZERO;
            return;
        }
        let mut cursor = F::Bits::ONE;
        while self.mask & cursor == F::Bits::ZERO {
            cursor = cursor.shift_up();
        }
        self.cursor = cursor;
    }

    /// True while the cursor sits on a set bit.
    #[inline]
    pub fn has_current(&self) -> bool {
        self.cursor != F::Bits::ZERO
    }

    /// Single-bit value under the cursor, zero once exhausted.
    #[inline]
    pub fn current_key(&self) -> F::Bits {
        self.cursor
    }

    /// Declared names for the bit under the cursor. Empty if the bit is not
    /// declared or the traversal is exhausted.
    pub fn current(&self) -> FlagNames<F::Bits> {
        F::flag_names(self.cursor)
    }

    /// Moves to the next higher set bit, or to the exhausted state when the
    /// cursor shifts past the top of the integer.
    pub fn advance(&mut self) {
        if self.cursor == F::Bits::ZERO {
            return;
        }
        let mut cursor = self.cursor.shift_up();
        while cursor != F::Bits::ZERO && self.mask & cursor == F::Bits::ZERO {
            cursor = cursor.shift_up();
        }
        self.cursor = cursor;
    }

    fn remaining(&self) -> usize {
        if self.cursor == F::Bits::ZERO {
            return 0;
        }
        (self.mask & !self.cursor.below()).count_ones() as usize
    }
}

impl<F: Flags> Iterator for Iter<F> {
    type Item = (F::Bits, FlagNames<F::Bits>);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_current() {
            return None;
        }
        let item = (self.cursor, self.current());
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<F: Flags> ExactSizeIterator for Iter<F> {}

impl<F: Flags> FusedIterator for Iter<F> {}

impl<F: Flags> Clone for Iter<F> {
    fn clone(&self) -> Self {
        Self {
            mask: self.mask,
            cursor: self.cursor,
            _vocabulary: PhantomData,
        }
    }
}

impl<F: Flags> fmt::Debug for Iter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("mask", &self.mask)
            .field("cursor", &self.cursor)
            .finish()
    }
}
