use nexus_flags::{FlagSet, Flags};

#[derive(Flags, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Perm {
    Read = 1,
    Write = 2,
    Exec = 4,
}

#[test]
fn derived_vocabulary() {
    assert_eq!(Perm::FLAGS.len(), 3);
    assert_eq!(Perm::FLAGS[0].name, "Read");
    assert_eq!(Perm::FLAGS[0].value, 1);
    assert_eq!(Perm::all_flags_mask(), 7);
}

#[test]
fn bits_returns_discriminant() {
    assert_eq!(Perm::Read.bits(), 1u32);
    assert_eq!(Perm::Write.bits(), 2u32);
    assert_eq!(Perm::Exec.bits(), 4u32);
}

#[test]
fn names_are_variant_identifiers() {
    let mut set = FlagSet::<Perm>::new();
    set.add_flag(Perm::Exec.bits()).add_flag(Perm::Read.bits());
    assert_eq!(set.flag_names().to_string(), "Read, Exec");
}

// Renamed, skipped and combined variants
#[derive(Flags, Clone, Copy)]
#[repr(u16)]
pub enum Order {
    #[flag(name = "buy")]
    Buy = 0x1,
    #[flag(name = "ioc")]
    ImmediateOrCancel = 0x2,
    PostOnly = 0x8,
    #[flag(skip)]
    Reserved = 0x4,
    BuyIoc = 0x3,
}

#[test]
fn renamed_variants() {
    assert_eq!(Order::from_name("ioc"), Some(2));
    assert_eq!(Order::from_name("ImmediateOrCancel"), None);
}

#[test]
fn skipped_variant_excluded() {
    assert!(!Order::all_flags().contains_key(&Order::Reserved.bits()));
    assert_eq!(Order::all_flags_mask(), 0xB);

    let mut set = FlagSet::<Order>::new();
    set.add_flag(Order::Reserved.bits());
    assert_eq!(set.unknown_bits(), 0x4);
    assert_eq!(set.flag_names().to_string(), "");
}

#[test]
fn combined_variant() {
    let set = FlagSet::<Order>::with_mask(Order::BuyIoc.bits());
    assert!(set.contains(Order::Buy.bits()));
    assert!(set.contains(Order::ImmediateOrCancel.bits()));
    assert_eq!(set.flag_names().to_string(), "buy, ioc, BuyIoc");
}

#[test]
fn parse_renamed_names() {
    let set = FlagSet::<Order>::from_names("buy, PostOnly").unwrap();
    assert_eq!(set.mask(), 0x9);
    assert!(FlagSet::<Order>::from_names("Buy").is_err());
}

// Implicit discriminants
#[derive(Flags, Clone, Copy)]
#[repr(u8)]
pub enum Implicit {
    Zero,
    One,
    Two,
}

#[test]
fn implicit_discriminants() {
    assert_eq!(Implicit::Zero.bits(), 0);
    assert_eq!(Implicit::Two.bits(), 2);
    assert_eq!(Implicit::all_flags_mask(), 3);
    // Zero never intersects a mask
    assert_eq!(Implicit::flag_names(3).to_string(), "One, Two");
}

// Signed repr with the sign bit declared
#[derive(Flags, Clone, Copy)]
#[repr(i8)]
pub enum Signed {
    Low = 1,
    High = -128,
}

#[test]
fn signed_repr() {
    assert_eq!(Signed::all_flags_mask(), -127);

    let set = FlagSet::<Signed>::with_mask(-127);
    assert_eq!(set.count(), 2);
    assert!(set.check_any_flag(Signed::High.bits()));
    assert_eq!(set.flag_names().to_string(), "High, Low");

    let keys: Vec<i8> = set.iter().map(|(bit, _)| bit).collect();
    assert_eq!(keys, [1, i8::MIN]);
}

// Wide repr
#[derive(Flags, Clone, Copy)]
#[repr(u128)]
pub enum Wide {
    Bottom = 1,
    Top = 1 << 127,
}

#[test]
fn wide_repr() {
    let set = FlagSet::<Wide>::with_mask(u128::MAX);
    assert_eq!(set.count(), 128);
    assert_eq!(set.unknown_bits(), u128::MAX & !(1 | 1 << 127));

    let names: Vec<String> = set
        .iter()
        .map(|(_, n)| n.to_string())
        .filter(|n| !n.is_empty())
        .collect();
    assert_eq!(names, ["Bottom", "Top"]);
}
