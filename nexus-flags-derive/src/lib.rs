use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Variant, parse_macro_input};

// =============================================================================
// Flags derive
// =============================================================================

/// Declares a fieldless enum as a flag vocabulary.
///
/// Every unit variant becomes a flag whose value is its discriminant and
/// whose name is the variant identifier. Per-variant options:
///
/// - `#[flag(name = "...")]` renames the flag.
/// - `#[flag(skip)]` leaves the variant out of the vocabulary.
///
/// Also emits `const fn bits(self)` returning the discriminant.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_flags_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed `#[flag(..)]` options for one variant.
struct FlagAttr {
    name: Option<LitStr>,
    skip: bool,
}

fn derive_flags_impl(input: DeriveInput) -> Result<TokenStream2> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Flags can only be derived for enums",
            ));
        }
    };

    let repr = parse_repr(&input)?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut defs = Vec::new();
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Flags variants cannot have fields",
            ));
        }

        let attr = parse_flag_attr(variant)?;
        if attr.skip {
            continue;
        }

        let variant_name = &variant.ident;
        let flag_name = match attr.name {
            Some(lit) => lit.value(),
            None => variant_name.to_string(),
        };

        defs.push(quote! {
            ::nexus_flags::FlagDef::new(#flag_name, #name::#variant_name as #repr),
        });
    }

    Ok(quote! {
        impl #impl_generics ::nexus_flags::Flags for #name #ty_generics #where_clause {
            type Bits = #repr;

            const FLAGS: &'static [::nexus_flags::FlagDef<#repr>] = &[
                #(#defs)*
            ];
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Flag value of this variant.
            #[inline]
            pub const fn bits(self) -> #repr {
                self as #repr
            }
        }
    })
}

fn parse_flag_attr(variant: &Variant) -> Result<FlagAttr> {
    let mut attr = FlagAttr {
        name: None,
        skip: false,
    };

    for a in &variant.attrs {
        if !a.path().is_ident("flag") {
            continue;
        }
        a.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(Error::new_spanned(lit, "flag name cannot be empty"));
                }
                if lit.value().contains(',') {
                    return Err(Error::new_spanned(lit, "flag name cannot contain ','"));
                }
                if lit.value().trim_ascii() != lit.value() {
                    return Err(Error::new_spanned(
                        lit,
                        "flag name cannot have leading or trailing whitespace",
                    ));
                }
                attr.name = Some(lit);
                Ok(())
            } else if meta.path.is_ident("skip") {
                attr.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(attr)
}

fn parse_repr(input: &DeriveInput) -> Result<Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("repr") {
            let repr: Ident = attr.parse_args()?;
            match repr.to_string().as_str() {
                "u8" | "u16" | "u32" | "u64" | "u128" | "i8" | "i16" | "i32" | "i64" | "i128" => {
                    return Ok(repr);
                }
                _ => {
                    return Err(Error::new_spanned(
                        repr,
                        "Flags requires an integer repr: u8, u16, u32, u64, u128, i8, i16, i32, i64, or i128",
                    ));
                }
            }
        }
    }

    Err(Error::new_spanned(
        input,
        "Flags requires a #[repr(u8/u16/u32/u64/u128/i8/i16/i32/i64/i128)] attribute",
    ))
}
