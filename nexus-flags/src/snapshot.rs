//! Externally serializable form of a mask.

/// The canonical structured value of a flag set: `{ "mask": <integer> }`.
///
/// Encoding is left to the caller. With the `serde` feature this derives
/// `Serialize`/`Deserialize`, and [`FlagSet`](crate::FlagSet) encodes
/// through it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskSnapshot<T> {
    /// Raw mask value.
    pub mask: T,
}

impl<T> MaskSnapshot<T> {
    /// Wraps a raw mask.
    #[inline]
    pub const fn new(mask: T) -> Self {
        Self { mask }
    }
}
