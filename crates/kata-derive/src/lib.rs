//! Kata Derive Macros: Declared Field Order for Reconstruction
//!
//! Rebuilding a value from JSON by feeding the object's values to a
//! constructor in key order breaks silently when the key order changes. This
//! crate derives `kata::Reconstruct`, which pins the order to the struct's
//! field declarations instead.
//!
//! # Example
//!
//! ```ignore
//! use kata::json::Reconstruct;
//!
//! #[derive(Reconstruct)]
//! struct Size {
//!     width: f64,
//!     #[kata(rename = "h")]
//!     height: f64,
//! }
//!
//! assert_eq!(Size::FIELDS, &["width", "h"]);
//! let size: Size = kata::deserialize_from_prototype(r#"{"h": 2, "width": 1}"#)?;
//! ```

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Derive macro for `kata::Reconstruct`.
///
/// Generates:
/// - `FIELDS` - JSON keys in field declaration order
/// - `from_values()` - positional constructor checking arity and converting
///   each value to its field type
///
/// # Attributes
///
/// - `#[kata(rename = "key")]` - Use `key` instead of the field name
///
/// Only structs with named fields are supported.
#[proc_macro_derive(Reconstruct, attributes(kata))]
pub fn derive_reconstruct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match extract_fields(&input.data) {
        Ok(fields) => fields,
        Err(message) => {
            return syn::Error::new(Span::call_site(), message)
                .to_compile_error()
                .into();
        }
    };

    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    let count = fields.len();
    let idents: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let bindings: Vec<_> = fields
        .iter()
        .map(|f| format_ident!("__kata_{}", f.ident))
        .collect();
    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();

    let expanded = quote! {
        impl #impl_generics ::kata::json::Reconstruct for #name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#keys),*];

            fn from_values(
                values: ::std::vec::Vec<::kata::__private::Value>,
            ) -> ::kata::KataResult<Self> {
                let [#(#bindings),*] = ::kata::json::take_exact::<#count>(values)?;
                ::std::result::Result::Ok(Self {
                    #(#idents: ::kata::json::convert::<#types>(#bindings)?),*
                })
            }
        }
    };

    TokenStream::from(expanded)
}

// ============================================================================
// Helper Functions
// ============================================================================

struct FieldInfo {
    ident: syn::Ident,
    key: String,
    ty: Type,
}

/// Extract named fields with their JSON keys
fn extract_fields(data: &Data) -> Result<Vec<FieldInfo>, &'static str> {
    let Data::Struct(data_struct) = data else {
        return Err("Reconstruct can only be derived for structs");
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err("Reconstruct requires named fields");
    };

    Ok(fields
        .named
        .iter()
        .filter_map(|f| {
            let ident = f.ident.clone()?;
            let key = extract_rename(&f.attrs).unwrap_or_else(|| ident.to_string());
            Some(FieldInfo {
                ident,
                key,
                ty: f.ty.clone(),
            })
        })
        .collect())
}

/// Extract the key from `#[kata(rename = "...")]`
fn extract_rename(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident("kata") {
            if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
                if nv.path.is_ident("rename") {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        return Some(s.value());
                    }
                }
            }
        }
    }
    None
}
