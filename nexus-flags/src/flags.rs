//! Flag vocabularies declared by consuming types.

use alloc::collections::BTreeMap;

use crate::bits::Bits;
use crate::error::UnknownFlagName;
use crate::names::FlagNames;

/// A named flag constant.
///
/// `value` is normally a single bit, but any combination is accepted.
///
/// Names must be non-empty, free of `,` and without leading or trailing
/// whitespace, so that rendered name lists parse back unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlagDef<T> {
    /// Display name.
    pub name: &'static str,
    /// Bit value.
    pub value: T,
}

impl<T> FlagDef<T> {
    /// Creates a flag definition.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty, contains `,`, or has leading or trailing
    /// whitespace. In a `const` vocabulary this is a compile error.
    #[inline]
    pub const fn new(name: &'static str, value: T) -> Self {
        assert!(is_valid_name(name), "flag name must be non-empty, trimmed and comma-free");
        Self { name, value }
    }
}

const fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty()
        || bytes[0].is_ascii_whitespace()
        || bytes[bytes.len() - 1].is_ascii_whitespace()
    {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            return false;
        }
        i += 1;
    }
    true
}

/// A closed vocabulary of named flags.
///
/// Usually derived on a fieldless `#[repr(..)]` enum:
///
/// ```
/// use nexus_flags::Flags;
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u8)]
/// pub enum Side {
///     Bid = 1,
///     Ask = 2,
///     #[flag(name = "both")]
///     Both = 3,
/// }
///
/// assert_eq!(Side::all_flags_mask(), 3);
/// assert_eq!(Side::from_name("both"), Some(3));
/// ```
///
/// It can also be implemented by hand. A type that lists nothing behaves as
/// an empty vocabulary:
///
/// ```
/// use nexus_flags::Flags;
///
/// struct Opaque;
/// impl Flags for Opaque {
///     type Bits = u16;
/// }
///
/// assert!(Opaque::all_flags().is_empty());
/// assert_eq!(Opaque::all_flags_mask(), 0);
/// ```
pub trait Flags {
    /// Mask storage type.
    type Bits: Bits;

    /// Every declared flag, in declaration order.
    const FLAGS: &'static [FlagDef<Self::Bits>] = &[];

    /// Mapping from flag value to name for every declared flag.
    ///
    /// When two flags share a value the later declaration wins.
    fn all_flags() -> BTreeMap<Self::Bits, &'static str> {
        let mut map = BTreeMap::new();
        for def in Self::FLAGS {
            map.insert(def.value, def.name);
        }
        map
    }

    /// Bitwise OR of every declared flag value.
    fn all_flags_mask() -> Self::Bits {
        Self::FLAGS
            .iter()
            .fold(Self::Bits::ZERO, |acc, def| acc | def.value)
    }

    /// Declared flags intersecting `mask`.
    fn flag_names(mask: Self::Bits) -> FlagNames<Self::Bits> {
        FlagNames::intersecting(Self::FLAGS, mask)
    }

    /// Value of the flag declared as `name`, if any.
    fn from_name(name: &str) -> Option<Self::Bits> {
        Self::FLAGS
            .iter()
            .rev()
            .find(|def| def.name == name)
            .map(|def| def.value)
    }

    /// Parses a `", "`-separated name list, as rendered by [`FlagNames`],
    /// into a mask.
    ///
    /// Surrounding whitespace and empty entries are ignored, so the empty
    /// string parses to zero.
    fn parse_names(names: &str) -> Result<Self::Bits, UnknownFlagName> {
        let mut mask = Self::Bits::ZERO;
        for name in names.split(',').map(str::trim_ascii).filter(|n| !n.is_empty()) {
            match Self::from_name(name) {
                Some(value) => mask = mask | value,
                None => return Err(UnknownFlagName::new(name)),
            }
        }
        Ok(mask)
    }
}
