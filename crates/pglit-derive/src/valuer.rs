//! `#[derive(Valuer)]`: let a Rust type render itself during interpolation.

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let body = match &input.data {
        Data::Enum(e) => expand_enum_body(&input, e)?,
        Data::Struct(s) => expand_newtype_body(&input, s)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "Valuer can only be derived for enums and newtype structs",
            ));
        }
    };

    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let mut generics = input.generics.clone();
    let predicates = &mut generics.make_where_clause().predicates;
    predicates.push(syn::parse_quote! {
        #name #ty_generics: ::std::fmt::Debug + ::std::marker::Send + ::std::marker::Sync
    });
    if let Data::Struct(s) = &input.data {
        // Checked to be a single-field tuple struct by `expand_newtype_body`.
        if let Some(field) = s.fields.iter().next() {
            let ty = &field.ty;
            predicates.push(syn::parse_quote! {
                #ty: ::std::clone::Clone + ::std::convert::Into<::pglit::Value>
            });
        }
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let mut from_generics = generics.clone();
    from_generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! { #name #ty_generics: 'static });
    let (_, _, from_where_clause) = from_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::pglit::Valuer for #name #ty_generics #where_clause {
            fn value(&self) -> ::std::result::Result<::pglit::Value, ::pglit::ValuerError> {
                #body
            }
        }

        impl #impl_generics ::std::convert::From<#name #ty_generics> for ::pglit::Value
            #from_where_clause
        {
            fn from(value: #name #ty_generics) -> Self {
                ::pglit::Value::valuer(value)
            }
        }
    })
}

fn expand_enum_body(input: &DeriveInput, data: &syn::DataEnum) -> Result<TokenStream> {
    let name = &input.ident;

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Valuer cannot be derived for an enum without variants",
        ));
    }

    let mut arms = Vec::new();
    for variant in &data.variants {
        if !matches!(&variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Valuer enum variants must be unit variants (no fields)",
            ));
        }

        let variant_ident = &variant.ident;
        let text =
            parse_rename(variant)?.unwrap_or_else(|| variant_ident.to_string().to_snake_case());

        arms.push(quote! {
            #name::#variant_ident => #text,
        });
    }

    Ok(quote! {
        let text: &'static str = match self {
            #(#arms)*
        };
        ::std::result::Result::Ok(::pglit::Value::from(text))
    })
}

fn expand_newtype_body(input: &DeriveInput, data: &syn::DataStruct) -> Result<TokenStream> {
    match &data.fields {
        // An inner derived type converts to `Value::Valuer`; resolve it here
        // so the newtype yields a primitive.
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(quote! {
            let inner: ::pglit::Value =
                ::std::convert::Into::into(::std::clone::Clone::clone(&self.0));
            match inner {
                ::pglit::Value::Valuer(valuer) => ::pglit::Valuer::value(&*valuer),
                other => ::std::result::Result::Ok(other),
            }
        }),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Valuer can only be derived for newtype structs (one unnamed field)",
        )),
    }
}

/// Parse `#[pglit(rename = "...")]` from a variant's attributes.
fn parse_rename(variant: &syn::Variant) -> Result<Option<String>> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("pglit") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in &nested {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        return Ok(Some(s.value()));
                    }
                    return Err(syn::Error::new_spanned(
                        &nv.value,
                        "rename expects a string literal",
                    ));
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown pglit attribute; expected `rename = \"...\"`",
                    ));
                }
            }
        }
    }
    Ok(None)
}
