//! Mask change tracing (`tracing` feature).

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::bits::Bits;

/// Trace an effective mask change.
///
/// # Arguments
///
/// * `vocabulary` - Type name of the flag vocabulary
/// * `old` - Mask before the change
/// * `new` - Mask after the change
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_modify<T: Bits>(vocabulary: &'static str, old: T, new: T) {
    trace!(
        target: "nexus_flags",
        vocabulary = vocabulary,
        old = ?old,
        new = ?new,
        "mask changed {:?} -> {:?}",
        old,
        new
    );
}

/// Trace an effective mask change - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_modify<T: Bits>(_vocabulary: &'static str, _old: T, _new: T) {}
