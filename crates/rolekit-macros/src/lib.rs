//! Rolekit proc macros.
//!
//! `host!` turns a host declaration into its record structs, the `Host`
//! impl, and the arity-exact `compose` constructor; the `Role` / `Attribute`
//! derives wire component types into the composition protocol. Generated
//! code refers to the `rolekit` facade crate by absolute path, so these
//! macros must be used through that crate.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, format_ident, quote};
use syn::{
    DeriveInput, Ident, Token, Type, Visibility, braced, parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

//
// ============================================================================
// Public entry points
// ============================================================================
//

/// Declare a host type from its role and attribute sets.
///
/// ```ignore
/// rolekit::host! {
///     pub struct Player {
///         roles: { logger: Logger, mover: Mover },
///         attributes: { transform: Transform, category: Category },
///     }
/// }
/// ```
///
/// Expands to `PlayerRoles` / `PlayerAttributes` record structs, `struct
/// Player` embedding a `Composition`, an `impl Host`, and
/// `Player::compose(..)` taking exactly one initializer per declared
/// component, in declared order.
#[proc_macro]
pub fn host(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as parse::HostInput);

    match validate::validate(&parsed) {
        Ok(()) => expand::expand(parsed).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Implement `Role`, with an optional `#[role(requires(A, B))]` dependency
/// rule.
#[proc_macro_derive(Role, attributes(role))]
pub fn derive_role(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand::expand_role(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement `Attribute`. The type must also implement `Default`; that is
/// the plain-data contract.
#[proc_macro_derive(Attribute)]
pub fn derive_attribute(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand::expand_attribute(&input).into()
}

//
// ============================================================================
// parse - host declaration grammar only
// ============================================================================
//

mod parse {
    use super::*;

    pub struct HostInput {
        pub attrs: Vec<syn::Attribute>,
        pub vis: Visibility,
        pub name: Ident,
        pub roles: Vec<SlotField>,
        pub attributes: Vec<SlotField>,
    }

    pub struct SlotField {
        pub name: Ident,
        pub ty: Type,
    }

    impl Parse for SlotField {
        fn parse(input: ParseStream) -> syn::Result<Self> {
            let name: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            let ty: Type = input.parse()?;

            Ok(Self { name, ty })
        }
    }

    impl Parse for HostInput {
        fn parse(input: ParseStream) -> syn::Result<Self> {
            let attrs = input.call(syn::Attribute::parse_outer)?;
            let vis: Visibility = input.parse()?;
            input.parse::<Token![struct]>()?;
            let name: Ident = input.parse()?;

            let body;
            braced!(body in input);

            let mut roles = None;
            let mut attributes = None;

            while !body.is_empty() {
                let key: Ident = body.parse()?;
                body.parse::<Token![:]>()?;

                let list;
                braced!(list in body);
                let fields = Punctuated::<SlotField, Token![,]>::parse_terminated(&list)?
                    .into_iter()
                    .collect::<Vec<_>>();

                match key.to_string().as_str() {
                    "roles" => {
                        if roles.replace(fields).is_some() {
                            return Err(syn::Error::new(key.span(), "duplicate `roles` section"));
                        }
                    }
                    "attributes" => {
                        if attributes.replace(fields).is_some() {
                            return Err(syn::Error::new(
                                key.span(),
                                "duplicate `attributes` section",
                            ));
                        }
                    }
                    other => {
                        return Err(syn::Error::new(
                            key.span(),
                            format!("expected `roles` or `attributes`, found `{other}`"),
                        ));
                    }
                }

                if body.peek(Token![,]) {
                    body.parse::<Token![,]>()?;
                }
            }

            let roles = roles
                .ok_or_else(|| syn::Error::new(name.span(), "missing `roles` section"))?;
            let attributes = attributes
                .ok_or_else(|| syn::Error::new(name.span(), "missing `attributes` section"))?;

            Ok(Self {
                attrs,
                vis,
                name,
                roles,
                attributes,
            })
        }
    }
}

//
// ============================================================================
// validate - semantic constraints
// ============================================================================
//

mod validate {
    use super::*;
    use parse::{HostInput, SlotField};
    use std::collections::HashSet;

    pub fn validate(input: &HostInput) -> syn::Result<()> {
        check_section(&input.roles, "role")?;
        check_section(&input.attributes, "attribute")?;

        // `compose` takes one argument per slot, so names must be unique
        // across both sections
        let mut names = HashSet::new();
        for field in input.roles.iter().chain(&input.attributes) {
            if !names.insert(field.name.to_string()) {
                return Err(syn::Error::new(field.name.span(), "duplicate slot name"));
            }
        }

        Ok(())
    }

    // Textual duplicate check; type aliases the macro cannot see through are
    // still caught by `Slot` impl coherence.
    fn check_section(fields: &[SlotField], kind: &str) -> syn::Result<()> {
        let mut seen = HashSet::new();
        for field in fields {
            let ty = field.ty.to_token_stream().to_string();
            if !seen.insert(ty) {
                return Err(syn::Error::new(
                    field.name.span(),
                    format!("duplicate {kind} type: a host may declare each type at most once"),
                ));
            }
        }

        Ok(())
    }
}

//
// ============================================================================
// expand - code generation only
// ============================================================================
//

mod expand {
    use super::*;
    use parse::{HostInput, SlotField};

    pub fn expand(input: HostInput) -> TokenStream2 {
        let HostInput {
            attrs,
            vis,
            name,
            roles,
            attributes,
        } = input;

        let roles_ty = format_ident!("{name}Roles");
        let attributes_ty = format_ident!("{name}Attributes");
        let name_str = name.to_string();

        let roles_record = record_struct(&vis, &roles_ty, &roles);
        let attributes_record = record_struct(&vis, &attributes_ty, &attributes);

        let role_names: Vec<_> = roles.iter().map(|f| &f.name).collect();
        let role_types: Vec<_> = roles.iter().map(|f| &f.ty).collect();
        let attribute_names: Vec<_> = attributes.iter().map(|f| &f.name).collect();
        let attribute_types: Vec<_> = attributes.iter().map(|f| &f.ty).collect();

        quote! {
            #roles_record
            #attributes_record

            #(#attrs)*
            #vis struct #name {
                composition: ::rolekit::Composition<#roles_ty, #attributes_ty>,
            }

            impl ::rolekit::Host for #name {
                type Roles = #roles_ty;
                type Attributes = #attributes_ty;

                const NAME: &'static str = #name_str;

                fn spec() -> ::rolekit::HostSpec {
                    ::rolekit::HostSpec::new(#name_str)
                        #(.with_role::<#role_types>())*
                        #(.with_attribute::<#attribute_types>())*
                }

                fn composition(&self) -> &::rolekit::Composition<#roles_ty, #attributes_ty> {
                    &self.composition
                }

                fn composition_mut(
                    &mut self,
                ) -> &mut ::rolekit::Composition<#roles_ty, #attributes_ty> {
                    &mut self.composition
                }
            }

            impl #name {
                /// Build an instance from one initializer per declared role
                /// and attribute, in declared order. Certification runs once
                /// per host type; the verdict is cached.
                #vis fn compose(
                    #(#role_names: #role_types,)*
                    #(#attribute_names: #attribute_types,)*
                ) -> ::core::result::Result<Self, ::rolekit::CompositionError> {
                    let certificate = <Self as ::rolekit::Host>::certificate()?;
                    let composition = ::rolekit::Composition::from_parts(
                        &certificate,
                        #roles_ty { #(#role_names,)* },
                        #attributes_ty { #(#attribute_names,)* },
                    )?;

                    Ok(Self { composition })
                }
            }
        }
    }

    fn record_struct(vis: &Visibility, record_name: &Ident, fields: &[SlotField]) -> TokenStream2 {
        let names: Vec<_> = fields.iter().map(|f| &f.name).collect();
        let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
        let count = fields.len();

        let id_pat = if fields.is_empty() {
            quote!(_id)
        } else {
            quote!(id)
        };

        let slots = fields.iter().map(|SlotField { name, ty }| {
            quote! {
                impl ::rolekit::Slot<#ty> for #record_name {
                    fn slot(&self) -> &#ty {
                        &self.#name
                    }

                    fn slot_mut(&mut self) -> &mut #ty {
                        &mut self.#name
                    }
                }
            }
        });

        quote! {
            #vis struct #record_name {
                #(#names: #types,)*
            }

            impl ::rolekit::Record for #record_name {
                fn catalog() -> ::rolekit::TypeCatalog {
                    let tokens: [::rolekit::TypeToken; #count] = [
                        #(::rolekit::TypeToken::of::<#types>(),)*
                    ];

                    ::rolekit::TypeCatalog::from_distinct(tokens)
                }

                fn slot_any(
                    &self,
                    #id_pat: ::core::any::TypeId,
                ) -> ::core::option::Option<&dyn ::core::any::Any> {
                    #(
                        if id == ::core::any::TypeId::of::<#types>() {
                            return ::core::option::Option::Some(&self.#names);
                        }
                    )*

                    ::core::option::Option::None
                }

                fn slot_any_mut(
                    &mut self,
                    #id_pat: ::core::any::TypeId,
                ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                    #(
                        if id == ::core::any::TypeId::of::<#types>() {
                            return ::core::option::Option::Some(&mut self.#names);
                        }
                    )*

                    ::core::option::Option::None
                }
            }

            #(#slots)*
        }
    }

    pub fn expand_role(input: &DeriveInput) -> syn::Result<TokenStream2> {
        let name = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        let mut requires = Vec::<Type>::new();
        for attr in &input.attrs {
            if !attr.path().is_ident("role") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("requires") {
                    let content;
                    parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    requires.extend(types);

                    Ok(())
                } else {
                    Err(meta.error("expected `requires(...)`"))
                }
            })?;
        }

        let rule = if requires.is_empty() {
            quote!()
        } else {
            quote! {
                fn dependency_rule() -> ::rolekit::DependencyRule {
                    ::rolekit::DependencyRule::new()
                        #(.with::<#requires>())*
                }
            }
        };

        Ok(quote! {
            impl #impl_generics ::rolekit::Role for #name #ty_generics #where_clause {
                #rule
            }
        })
    }

    pub fn expand_attribute(input: &DeriveInput) -> TokenStream2 {
        let name = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        quote! {
            impl #impl_generics ::rolekit::Attribute for #name #ty_generics #where_clause {}
        }
    }
}
