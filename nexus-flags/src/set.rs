//! Mask storage with change notification.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::any::type_name;
use core::cell::RefCell;
use core::fmt;

use crate::bits::Bits;
use crate::error::UnknownFlagName;
use crate::flags::Flags;
use crate::iter::Iter;
use crate::names::FlagNames;
use crate::snapshot::MaskSnapshot;
use crate::trace::trace_modify;

// Shared so the set keeps its callback while lending it out, even if the
// callback unwinds.
type OnModify<F> = Rc<RefCell<dyn FnMut(&FlagSet<F>)>>;

/// A mask over the vocabulary `F`.
///
/// Any integer is a legal mask, including bits no flag declares. Mutations
/// return `&mut Self` for chaining and invoke the registered callback once
/// per mutation that actually changes the mask.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use nexus_flags::{FlagSet, Flags};
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u16)]
/// enum Order {
///     Buy = 1,
///     Ioc = 2,
/// }
///
/// let hits = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&hits);
///
/// let mut flags = FlagSet::<Order>::new();
/// flags.set_on_modify(move |_| seen.set(seen.get() + 1));
///
/// flags.add_flag(Order::Buy.bits());
/// flags.add_flag(Order::Buy.bits()); // unchanged, no callback
/// flags.remove_flag(Order::Ioc.bits()); // unchanged, no callback
/// assert_eq!(hits.get(), 1);
/// ```
pub struct FlagSet<F: Flags> {
    mask: F::Bits,
    on_modify: Option<OnModify<F>>,
}

impl<F: Flags> FlagSet<F> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::with_mask(F::Bits::ZERO)
    }

    /// Creates a set holding `mask`.
    #[inline]
    pub fn with_mask(mask: F::Bits) -> Self {
        Self {
            mask,
            on_modify: None,
        }
    }

    /// Creates a set from a `", "`-separated list of declared names.
    pub fn from_names(names: &str) -> Result<Self, UnknownFlagName> {
        F::parse_names(names).map(Self::with_mask)
    }

    /// Mapping from value to name for every flag `F` declares.
    #[inline]
    pub fn all_flags() -> BTreeMap<F::Bits, &'static str> {
        F::all_flags()
    }

    /// OR of every flag `F` declares.
    #[inline]
    pub fn all_flags_mask() -> F::Bits {
        F::all_flags_mask()
    }

    /// Declared flags intersecting an arbitrary `mask`.
    #[inline]
    pub fn names_of(mask: F::Bits) -> FlagNames<F::Bits> {
        F::flag_names(mask)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replaces the mask.
    pub fn set_mask(&mut self, mask: F::Bits) -> &mut Self {
        let old = self.mask;
        self.mask = mask;
        if old != mask {
            self.modified(old);
        }
        self
    }

    /// Sets every bit of `flag`.
    #[inline]
    pub fn add_flag(&mut self, flag: F::Bits) -> &mut Self {
        self.set_mask(self.mask | flag)
    }

    /// Clears every bit of `flag`.
    #[inline]
    pub fn remove_flag(&mut self, flag: F::Bits) -> &mut Self {
        self.set_mask(self.mask & !flag)
    }

    /// Flips every bit of `flag`.
    #[inline]
    pub fn toggle_flag(&mut self, flag: F::Bits) -> &mut Self {
        self.set_mask(self.mask ^ flag)
    }

    /// Sets or clears `flag`.
    #[inline]
    pub fn set_flag_to(&mut self, flag: F::Bits, enabled: bool) -> &mut Self {
        if enabled {
            self.add_flag(flag)
        } else {
            self.remove_flag(flag)
        }
    }

    /// Clears every bit.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.set_mask(F::Bits::ZERO)
    }

    /// Clears bits that no declared flag covers.
    #[inline]
    pub fn retain_known(&mut self) -> &mut Self {
        self.set_mask(self.mask & F::all_flags_mask())
    }

    /// Registers the change callback, replacing any previous one.
    ///
    /// A callback that panics stays registered and runs again on the next
    /// change.
    ///
    /// The callback sees the set after the change. The previous mask is not
    /// passed; snapshot [`mask`](Self::mask) before mutating if it matters.
    pub fn set_on_modify<C>(&mut self, callback: C)
    where
        C: FnMut(&FlagSet<F>) + 'static,
    {
        self.on_modify = Some(Rc::new(RefCell::new(callback)));
    }

    /// Removes the change callback.
    #[inline]
    pub fn clear_on_modify(&mut self) {
        self.on_modify = None;
    }

    fn modified(&mut self, old: F::Bits) {
        trace_modify(type_name::<F>(), old, self.mask);
        if let Some(callback) = self.on_modify.clone() {
            let mut callback = callback.borrow_mut();
            (&mut *callback)(&*self);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current mask.
    #[inline]
    pub fn mask(&self) -> F::Bits {
        self.mask
    }

    /// With `match_all`, true if every bit of `flag` is set; otherwise true
    /// if any bit of `flag` is set.
    ///
    /// A zero `flag` is trivially all-set but never any-set. For signed
    /// masks the sign bit counts like any other bit, so a negative
    /// intersection is any-set.
    #[inline]
    pub fn check_flag(&self, flag: F::Bits, match_all: bool) -> bool {
        let intersection = self.mask & flag;
        if match_all {
            intersection == flag
        } else {
            intersection != F::Bits::ZERO
        }
    }

    /// Same as `check_flag(flag, true)`.
    #[inline]
    pub fn contains(&self, flag: F::Bits) -> bool {
        self.check_flag(flag, true)
    }

    /// Same as `check_flag(flag, false)`.
    #[inline]
    pub fn check_any_flag(&self, flag: F::Bits) -> bool {
        self.check_flag(flag, false)
    }

    /// Number of set bits.
    #[inline]
    pub fn count(&self) -> u32 {
        self.mask.count_ones()
    }

    /// True if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask == F::Bits::ZERO
    }

    /// Set bits that no declared flag covers.
    #[inline]
    pub fn unknown_bits(&self) -> F::Bits {
        self.mask & !F::all_flags_mask()
    }

    /// Declared flags intersecting the current mask.
    #[inline]
    pub fn flag_names(&self) -> FlagNames<F::Bits> {
        F::flag_names(self.mask)
    }

    /// Iterates the set bits of the current mask, lowest first.
    #[inline]
    pub fn iter(&self) -> Iter<F> {
        Iter::new(self.mask)
    }

    /// Structured value for external encoding.
    #[inline]
    pub fn snapshot(&self) -> MaskSnapshot<F::Bits> {
        MaskSnapshot::new(self.mask)
    }
}

impl<F: Flags> Default for FlagSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Flags> From<MaskSnapshot<F::Bits>> for FlagSet<F> {
    fn from(snapshot: MaskSnapshot<F::Bits>) -> Self {
        Self::with_mask(snapshot.mask)
    }
}

impl<'a, F: Flags> IntoIterator for &'a FlagSet<F> {
    type Item = (F::Bits, FlagNames<F::Bits>);
    type IntoIter = Iter<F>;

    fn into_iter(self) -> Iter<F> {
        self.iter()
    }
}

impl<F: Flags> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        f.debug_struct("FlagSet")
            .field("mask", &self.mask)
            .field("names", &format_args!("{names}"))
            .field("on_modify", &self.on_modify.is_some())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<F: Flags> serde::Serialize for FlagSet<F>
where
    F::Bits: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.snapshot(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: Flags> serde::Deserialize<'de> for FlagSet<F>
where
    F::Bits: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <MaskSnapshot<F::Bits> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::FlagSet;
    use crate::flags::{FlagDef, Flags};

    struct Abc;
    impl Flags for Abc {
        type Bits = u32;
        const FLAGS: &'static [FlagDef<u32>] = &[
            FlagDef::new("A", 1),
            FlagDef::new("B", 2),
            FlagDef::new("C", 4),
        ];
    }

    #[test]
    fn callback_sees_new_mask() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let mut set = FlagSet::<Abc>::new();
        set.set_on_modify(move |s| log.borrow_mut().push(s.mask()));
        set.add_flag(1).add_flag(4).remove_flag(1).set_mask(4);

        assert_eq!(*seen.borrow(), [1, 5, 4]);
    }

    #[test]
    fn callback_replaced_and_cleared() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));

        let mut set = FlagSet::<Abc>::new();
        let f = Rc::clone(&first);
        set.set_on_modify(move |_| *f.borrow_mut() += 1);
        set.add_flag(1);

        let s = Rc::clone(&second);
        set.set_on_modify(move |_| *s.borrow_mut() += 1);
        set.add_flag(2);

        set.clear_on_modify();
        set.add_flag(4);

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
        assert_eq!(set.mask(), 7);
    }

    #[test]
    fn debug_shows_names() {
        let set = FlagSet::<Abc>::with_mask(5);
        let rendered = alloc::format!("{:?}", set);
        assert_eq!(
            rendered,
            "FlagSet { mask: 5, names: A, C, on_modify: false }"
        );
    }
}
