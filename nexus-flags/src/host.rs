//! Forwarding flag operations through a host type.

use alloc::collections::BTreeMap;

use crate::flags::Flags;
use crate::iter::Iter;
use crate::names::FlagNames;
use crate::set::FlagSet;

/// A type that embeds a [`FlagSet`] and exposes its operations as its own.
///
/// Implement the two accessors; everything else forwards. Mutating methods
/// return the host for chaining.
///
/// ```
/// use nexus_flags::{FlagHost, FlagSet, Flags};
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u8)]
/// enum Status {
///     Active = 1,
///     Locked = 2,
/// }
///
/// #[derive(Default)]
/// struct Account {
///     id: u64,
///     status: FlagSet<Status>,
/// }
///
/// impl FlagHost<Status> for Account {
///     fn flag_set(&self) -> &FlagSet<Status> {
///         &self.status
///     }
///
///     fn flag_set_mut(&mut self) -> &mut FlagSet<Status> {
///         &mut self.status
///     }
/// }
///
/// let mut account = Account { id: 7, ..Default::default() };
/// account.add_flag(Status::Active.bits()).add_flag(Status::Locked.bits());
/// assert_eq!(account.mask(), 3);
/// assert_eq!(account.flag_names().to_string(), "Active, Locked");
/// ```
pub trait FlagHost<F: Flags> {
    /// The embedded set.
    fn flag_set(&self) -> &FlagSet<F>;

    /// The embedded set, mutably.
    fn flag_set_mut(&mut self) -> &mut FlagSet<F>;

    /// See [`FlagSet::all_flags`].
    fn all_flags() -> BTreeMap<F::Bits, &'static str>
    where
        Self: Sized,
    {
        F::all_flags()
    }

    /// See [`FlagSet::all_flags_mask`].
    fn all_flags_mask() -> F::Bits
    where
        Self: Sized,
    {
        F::all_flags_mask()
    }

    /// See [`FlagSet::names_of`].
    fn names_of(&self, mask: F::Bits) -> FlagNames<F::Bits> {
        F::flag_names(mask)
    }

    /// See [`FlagSet::mask`].
    fn mask(&self) -> F::Bits {
        self.flag_set().mask()
    }

    /// See [`FlagSet::set_mask`].
    fn set_mask(&mut self, mask: F::Bits) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().set_mask(mask);
        self
    }

    /// See [`FlagSet::add_flag`].
    fn add_flag(&mut self, flag: F::Bits) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().add_flag(flag);
        self
    }

    /// See [`FlagSet::remove_flag`].
    fn remove_flag(&mut self, flag: F::Bits) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().remove_flag(flag);
        self
    }

    /// See [`FlagSet::toggle_flag`].
    fn toggle_flag(&mut self, flag: F::Bits) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().toggle_flag(flag);
        self
    }

    /// See [`FlagSet::set_flag_to`].
    fn set_flag_to(&mut self, flag: F::Bits, enabled: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().set_flag_to(flag, enabled);
        self
    }

    /// See [`FlagSet::clear`].
    fn clear(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().clear();
        self
    }

    /// See [`FlagSet::retain_known`].
    fn retain_known(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.flag_set_mut().retain_known();
        self
    }

    /// See [`FlagSet::set_on_modify`].
    fn set_on_modify<C>(&mut self, callback: C)
    where
        C: FnMut(&FlagSet<F>) + 'static,
    {
        self.flag_set_mut().set_on_modify(callback);
    }

    /// See [`FlagSet::clear_on_modify`].
    fn clear_on_modify(&mut self) {
        self.flag_set_mut().clear_on_modify();
    }

    /// See [`FlagSet::check_flag`].
    fn check_flag(&self, flag: F::Bits, match_all: bool) -> bool {
        self.flag_set().check_flag(flag, match_all)
    }

    /// See [`FlagSet::contains`].
    fn contains(&self, flag: F::Bits) -> bool {
        self.flag_set().contains(flag)
    }

    /// See [`FlagSet::check_any_flag`].
    fn check_any_flag(&self, flag: F::Bits) -> bool {
        self.flag_set().check_any_flag(flag)
    }

    /// See [`FlagSet::count`].
    fn count(&self) -> u32 {
        self.flag_set().count()
    }

    /// See [`FlagSet::is_empty`].
    fn is_empty(&self) -> bool {
        self.flag_set().is_empty()
    }

    /// See [`FlagSet::unknown_bits`].
    fn unknown_bits(&self) -> F::Bits {
        self.flag_set().unknown_bits()
    }

    /// See [`FlagSet::flag_names`].
    fn flag_names(&self) -> FlagNames<F::Bits> {
        self.flag_set().flag_names()
    }

    /// See [`FlagSet::iter`].
    fn iter(&self) -> Iter<F> {
        self.flag_set().iter()
    }
}
