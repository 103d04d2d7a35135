//! Derive macros for Dexter
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! unidirectional data flow systems with Dexter.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (intents/completions)
//!
//! # Example
//!
//! ```ignore
//! use dexter_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum BrowserAction {
//!     #[intent]
//!     Refresh,
//!
//!     #[completion]
//!     Refreshed { entries: Vec<String> },
//! }
//!
//! // Generated methods:
//! assert!(BrowserAction::Refresh.is_intent());
//! assert!(BrowserAction::Refreshed { entries: vec![] }.is_completion());
//! assert_eq!(BrowserAction::Refresh.label(), "Refresh");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Data, Fields, Attribute};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_intent()` - Returns true if this variant is an intent
/// - `is_completion()` - Returns true if this variant is a completion
/// - `label()` - Returns the variant name for logging and metrics
///
/// Intents are the actions callers feed into a store; completions are the
/// actions effects feed back when asynchronous work settles.
///
/// # Attributes
///
/// - `#[intent]` - Mark a variant as an intent
/// - `#[completion]` - Mark a variant as a completion
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[intent]` and `#[completion]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum CatalogAction {
///     #[intent]
///     FetchList,
///
///     #[intent]
///     FetchDetails { name: String },
///
///     #[completion]
///     ListLoaded { token: RequestToken, entries: Vec<NamedResource> },
///
///     #[completion]
///     ListFailed { token: RequestToken, message: String },
/// }
///
/// // Usage:
/// let action = CatalogAction::FetchList;
///
/// assert!(action.is_intent());
/// assert!(!action.is_completion());
/// assert_eq!(action.label(), "FetchList");
/// ```
#[proc_macro_derive(Action, attributes(intent, completion))]
#[allow(clippy::expect_used)] // Proc macro panics become compile errors, not runtime panics
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums"
        )
        .to_compile_error()
        .into();
    };

    // Collect variants marked as intents or completions
    let mut intent_variants = Vec::new();
    let mut completion_variants = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let is_intent = has_attribute(&variant.attrs, "intent");
        let is_completion = has_attribute(&variant.attrs, "completion");

        if is_intent && is_completion {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[intent] and #[completion]"
            )
            .to_compile_error()
            .into();
        }

        if is_intent {
            intent_variants.push(variant_name);
        }

        if is_completion {
            completion_variants.push(variant_name);
        }
    }

    // Build a map of variant names to their field types for efficient lookup
    let variant_map: std::collections::HashMap<_, _> = data_enum
        .variants
        .iter()
        .map(|v| (&v.ident, &v.fields))
        .collect();

    // Generate is_intent() match arms
    let is_intent_arms = intent_variants.iter().map(|variant| {
        // SAFETY: We collected these variants from data_enum.variants above, so they must exist
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate is_completion() match arms
    let is_completion_arms = completion_variants.iter().map(|variant| {
        // SAFETY: We collected these variants from data_enum.variants above, so they must exist
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate label() match arms for every variant
    let label_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let label = variant_name.to_string();
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #label, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #label, },
            Fields::Unit => quote! { Self::#variant_name => #label, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is an intent
            #[must_use]
            pub const fn is_intent(&self) -> bool {
                match self {
                    #(#is_intent_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is a completion
            #[must_use]
            pub const fn is_completion(&self) -> bool {
                match self {
                    #(#is_completion_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name for logging and metrics
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    #(#label_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident(name)
    })
}

#[cfg(test)]
mod tests {
    // Derive expansion is exercised by the integration tests in tests/
}
