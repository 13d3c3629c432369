//! Declares the color models of `tristim`.
//!
//! Every model is a struct with exactly three named components. Components
//! may carry a `#[range(min..=max)]` attribute (either end may be left open)
//! which becomes part of the validating constructor generated for the model.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// Declare a color model and generate its constructor and conversions.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Models can not be generic.")
            .to_compile_error()
            .into();
    }

    let mut field_names = vec![];
    let mut checks = vec![];

    for field in input.fields.iter_mut() {
        let Some(name) = field.ident.clone() else {
            return syn::Error::new_spanned(&*field, "Model components must be named.")
                .to_compile_error()
                .into();
        };

        // Make sure the 3 specified fields are public.
        field.vis = syn::Visibility::Public(Default::default());

        let (min, max) = match bounds(&field.attrs) {
            Ok(bounds) => bounds,
            Err(err) => return err.to_compile_error().into(),
        };
        field.attrs.retain(|attr| !attr.path().is_ident("range"));

        let label = name.to_string();
        checks.push(quote! {
            crate::error::DomainError::check(MODEL, #label, #name, #min, #max)?;
        });
        field_names.push(name);
    }

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let struct_name = input.ident.clone();
    let model = struct_name.to_string();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model. Fails if any component lies
            /// outside of its domain.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> ::core::result::Result<Self, crate::error::Error> {
                const MODEL: &str = #model;
                #(#checks)*
                Ok(Self {
                    #field1,
                    #field2,
                    #field3,
                })
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl ::core::convert::TryFrom<crate::color::Components> for #struct_name {
            type Error = crate::error::Error;

            fn try_from(value: crate::color::Components) -> ::core::result::Result<Self, Self::Error> {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl ::core::convert::From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }

        impl ::core::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({}, {}, {})", #model, self.#field1, self.#field2, self.#field3)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

/// Extract the lower and upper bound from a `#[range(..)]` attribute as
/// `Option` expressions.
fn bounds(attrs: &[syn::Attribute]) -> syn::Result<(TokenStream2, TokenStream2)> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("range")) else {
        return Ok((quote!(None), quote!(None)));
    };

    let range: syn::ExprRange = attr.parse_args()?;
    if matches!(range.limits, syn::RangeLimits::HalfOpen(_)) && range.end.is_some() {
        return Err(syn::Error::new_spanned(
            &range,
            "Component ranges must be inclusive, use `..=`.",
        ));
    }

    let bound = |expr: &Option<Box<syn::Expr>>| match expr {
        Some(expr) => quote!(Some(#expr)),
        None => quote!(None),
    };

    Ok((bound(&range.start), bound(&range.end)))
}
