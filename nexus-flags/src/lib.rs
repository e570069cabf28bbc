//! Named bitmask flag sets.
//!
//! `nexus-flags` lets a type declare a closed vocabulary of named integer
//! flags once, and gives any holder of a mask over that vocabulary generic
//! set/clear/check operations, change notification, name rendering and
//! iteration over the set bits.
//!
//! # Example
//!
//! ```
//! use nexus_flags::{FlagSet, Flags};
//!
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u32)]
//! pub enum Perm {
//!     Read = 1,
//!     Write = 2,
//!     Exec = 4,
//! }
//!
//! let mut perms = FlagSet::<Perm>::new();
//! perms.add_flag(Perm::Read.bits()).add_flag(Perm::Exec.bits());
//!
//! assert_eq!(perms.mask(), 0b101);
//! assert!(perms.check_flag(Perm::Read.bits(), true));
//! assert!(!perms.check_any_flag(Perm::Write.bits()));
//! assert_eq!(perms.count(), 2);
//! assert_eq!(perms.flag_names().to_string(), "Read, Exec");
//!
//! let bits: Vec<u32> = perms.iter().map(|(bit, _)| bit).collect();
//! assert_eq!(bits, [1, 4]);
//!
//! assert_eq!(Perm::all_flags_mask(), 0b111);
//! ```
//!
//! # Derive errors
//!
//! `#[derive(Flags)]` only accepts fieldless enums:
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags)]
//! struct NotAnEnum(u8); // ERROR: Flags can only be derived for enums
//! ```
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags)]
//! #[repr(u8)]
//! enum Payload {
//!     Empty,
//!     Data { len: u8 }, // ERROR: Flags variants cannot have fields
//! }
//! ```
//!
//! The enum needs an integer repr:
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! enum NoRepr { // ERROR: Flags requires a #[repr(..)] attribute
//!     A = 1,
//! }
//! ```
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! #[repr(usize)]
//! enum Pointer { // ERROR: usize is not a supported repr
//!     A = 1,
//! }
//! ```
//!
//! Flag names must render and parse back unchanged:
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u8)]
//! enum Empty {
//!     #[flag(name = "")] // ERROR: flag name cannot be empty
//!     A = 1,
//! }
//! ```
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u8)]
//! enum Comma {
//!     #[flag(name = "a,b")] // ERROR: flag name cannot contain ','
//!     A = 1,
//! }
//! ```
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u8)]
//! enum Padded {
//!     #[flag(name = " a")] // ERROR: leading whitespace
//!     A = 1,
//! }
//! ```
//! ```compile_fail
//! use nexus_flags::Flags;
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u8)]
//! enum Unknown {
//!     #[flag(rename = "a")] // ERROR: expected `name = "..."` or `skip`
//!     A = 1,
//! }
//! ```
//!
//! Hand-written vocabularies are checked when the constant is evaluated:
//! ```compile_fail
//! use nexus_flags::{FlagDef, Flags};
//! struct Bad;
//! impl Flags for Bad {
//!     type Bits = u8;
//!     const FLAGS: &'static [FlagDef<u8>] = &[FlagDef::new("a, b", 1)];
//! }
//! assert_eq!(Bad::FLAGS.len(), 1); // ERROR: flag name must be non-empty, trimmed and comma-free
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod bits;
mod error;
mod flags;
mod host;
mod iter;
mod names;
mod set;
mod snapshot;
mod trace;

pub use bits::Bits;
pub use error::UnknownFlagName;
pub use flags::{FlagDef, Flags};
pub use host::FlagHost;
pub use iter::Iter;
pub use names::FlagNames;
pub use set::FlagSet;
pub use snapshot::MaskSnapshot;

#[cfg(feature = "derive")]
pub use nexus_flags_derive::Flags;
