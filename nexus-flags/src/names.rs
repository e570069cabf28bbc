//! Rendering masks as flag names.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use core::fmt;

use crate::bits::Bits;
use crate::flags::FlagDef;

/// Declared flags present in a mask, keyed by value.
///
/// `Display` joins the names with `", "` in ascending value order. Bits of
/// the mask that no declared flag covers are not represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagNames<T> {
    map: BTreeMap<T, &'static str>,
}

impl<T: Bits> FlagNames<T> {
    /// Collects every definition whose value shares at least one bit with
    /// `mask`. Later definitions of the same value win.
    pub(crate) fn intersecting(defs: &'static [FlagDef<T>], mask: T) -> Self {
        let mut map = BTreeMap::new();
        for def in defs {
            if def.value & mask != T::ZERO {
                map.insert(def.value, def.name);
            }
        }
        Self { map }
    }

    /// Name for `value`, if it is present.
    #[inline]
    pub fn get(&self, value: T) -> Option<&'static str> {
        self.map.get(&value).copied()
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no declared flag is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(value, name)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &'static str)> + '_ {
        self.map.iter().map(|(&value, &name)| (value, name))
    }

    /// The value-to-name mapping.
    #[inline]
    pub fn into_map(self) -> BTreeMap<T, &'static str> {
        self.map
    }
}

impl<T> Default for FlagNames<T> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<T> IntoIterator for FlagNames<T> {
    type Item = (T, &'static str);
    type IntoIter = btree_map::IntoIter<T, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<T> fmt::Display for FlagNames<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.map.values();
        if let Some(first) = names.next() {
            f.write_str(first)?;
            for name in names {
                f.write_str(", ")?;
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq<str> for FlagNames<T> {
    fn eq(&self, other: &str) -> bool {
        let mut rest = other;
        for (i, name) in self.map.values().enumerate() {
            if i > 0 {
                match rest.strip_prefix(", ") {
                    Some(r) => rest = r,
                    None => return false,
                }
            }
            match rest.strip_prefix(*name) {
                Some(r) => rest = r,
                None => return false,
            }
        }
        rest.is_empty()
    }
}

impl<T: PartialEq> PartialEq<&str> for FlagNames<T> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
