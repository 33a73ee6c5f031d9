//! Derive macro for the `fieldlist` crate.
//!
//! - `Reflect`: captures a struct's fields as a `'static` array of `fieldlist::LoadedField` handles, so the
//!   fields can be browsed through `fieldlist::ForLoadedFields` at runtime.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Type, parse_macro_input};

/// Generates the `fieldlist::Reflect` implementation for a struct.
///
/// Field order follows declaration order. Tuple struct fields are named by their position (`"0"`, `"1"`, ...),
/// unit structs have no fields. Enums and unions are rejected.
///
/// # Example
/// ```ignore
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// // Generates:
/// impl fieldlist::Reflect for Person {
///     fn loaded_fields() -> &'static [fieldlist::LoadedField] {
///         static FIELDS: [fieldlist::LoadedField; 2] = [
///             fieldlist::LoadedField::new("name", "String", "Person", 0usize),
///             fieldlist::LoadedField::new("age", "i64", "Person", 1usize),
///         ];
///         &FIELDS
///     }
/// }
/// ```
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_reflect(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_reflect(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let owner = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (field_names, field_types): (Vec<String>, Vec<String>) = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|f| {
                    let field_name = f.ident.as_ref()?.unraw().to_string();
                    Some((field_name, render_type(&f.ty)))
                })
                .unzip(),
            Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, f)| (i.to_string(), render_type(&f.ty)))
                .unzip(),
            Fields::Unit => (vec![], vec![]),
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "`Reflect` can only be derived for structs"));
        }
    };

    let count = field_names.len();
    let positions = 0..count;

    Ok(quote! {
        impl #impl_generics ::fieldlist::Reflect for #name #ty_generics #where_clause {
            fn loaded_fields() -> &'static [::fieldlist::LoadedField] {
                static FIELDS: [::fieldlist::LoadedField; #count] = [
                    #(::fieldlist::LoadedField::new(#field_names, #field_types, #owner, #positions)),*
                ];
                &FIELDS
            }
        }
    })
}

/// Renders a type the way it is usually written (`Option<String>`, `&'a str`, `[u8; 4]`).
///
/// Token streams print with a space between every token; only spaces between two word-like tokens, after `,`/`;`,
/// after `mut`/`dyn`/`impl`, and around `->`, `=` and `+` are kept.
fn render_type(ty: &Type) -> String {
    let spaced = quote!(#ty).to_string();
    let chars: Vec<char> = spaced.chars().collect();
    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != ' ' {
            out.push(c);
            continue;
        }
        let prev = out.chars().last();
        let next = chars.get(i + 1).copied();
        let keep = match (prev, next) {
            (Some(p), Some(n)) if is_word(p) && is_word(n) => true,
            (Some(_), Some(_)) if ends_with_keyword(&out) => true,
            (Some(',' | ';' | '=' | '+'), _) => true,
            (_, Some('=' | '+')) => true,
            (Some('>'), _) => out.ends_with("->"),
            (_, Some('-')) => chars.get(i + 2) == Some(&'>'),
            _ => false,
        };
        if keep {
            out.push(' ');
        }
    }
    out
}

fn ends_with_keyword(out: &str) -> bool {
    ["mut", "dyn", "impl"].iter().any(|kw| {
        out.strip_suffix(kw)
            .is_some_and(|head| !head.chars().last().is_some_and(is_word))
    })
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
