extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericParam, Index, LitStr, Path, parse_macro_input,
    parse_quote,
};

/// How one field is copied and released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldMode {
    /// Through the field's own `Element` impl.
    Element,
    /// Bitwise copy; dropped on release.
    Shallow,
    /// `Clone::clone`; dropped on release.
    Clone,
}

/// Container-level options from `#[element(...)]`.
#[derive(Default)]
struct ElementOpts {
    shallow: bool,
    destroy: Option<Path>,
    krate: Option<Path>,
}

fn parse_container_opts(attrs: &[Attribute]) -> syn::Result<ElementOpts> {
    let mut opts = ElementOpts::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("element")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("shallow") {
                opts.shallow = true;
                Ok(())
            } else if meta.path.is_ident("destroy") {
                opts.destroy = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                opts.krate = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `shallow`, `destroy = path` or `crate = \"path\"`"))
            }
        })?;
    }
    if opts.shallow && opts.destroy.is_some() {
        return Err(syn::Error::new_spanned(
            &attrs[0],
            "`shallow` elements own nothing and cannot take a `destroy` hook",
        ));
    }
    Ok(opts)
}

fn parse_field_mode(attrs: &[Attribute]) -> syn::Result<FieldMode> {
    let mut mode = FieldMode::Element;
    for attr in attrs.iter().filter(|a| a.path().is_ident("element")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("shallow") {
                mode = FieldMode::Shallow;
                Ok(())
            } else if meta.path.is_ident("clone") {
                mode = FieldMode::Clone;
                Ok(())
            } else {
                Err(meta.error("expected `shallow` or `clone` on a field"))
            }
        })?;
    }
    Ok(mode)
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let opts = parse_container_opts(&input.attrs)?;
    let krate = opts
        .krate
        .clone()
        .unwrap_or_else(|| parse_quote!(::linked_core));

    let fields = match &input.data {
        Data::Struct(ds) => &ds.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Element derive only supports structs",
            ));
        }
    };

    // Each type parameter must itself be an element.
    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(tp) = param {
            tp.bounds.push(parse_quote!(#krate::Element));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident = &input.ident;

    if opts.shallow {
        return Ok(quote! {
            impl #impl_generics #krate::Element for #ident #ty_generics #where_clause {
                #[inline]
                fn copy_element(&self) -> Self {
                    *self
                }
            }
        });
    }

    let modes = fields
        .iter()
        .map(|f| parse_field_mode(&f.attrs))
        .collect::<syn::Result<Vec<_>>>()?;

    let copy_field = |access: TokenStream2, mode: FieldMode| match mode {
        FieldMode::Element => quote! { #krate::Element::copy_element(&#access) },
        FieldMode::Shallow => quote! { #access },
        FieldMode::Clone => quote! { ::core::clone::Clone::clone(&#access) },
    };

    let release_field = |binding: &syn::Ident, mode: FieldMode| match mode {
        FieldMode::Element => quote! { #krate::Element::destroy_element(#binding); },
        FieldMode::Shallow | FieldMode::Clone => quote! { ::core::mem::drop(#binding); },
    };

    let (copy_body, bindings) = match fields {
        Fields::Named(named) => {
            let names: Vec<_> = named.named.iter().filter_map(|f| f.ident.clone()).collect();
            let copies = names
                .iter()
                .zip(&modes)
                .map(|(n, m)| copy_field(quote! { self.#n }, *m));
            (
                quote! { Self { #( #names: #copies ),* } },
                Some((quote! { Self { #( #names ),* } }, names)),
            )
        }
        Fields::Unnamed(unnamed) => {
            let idx: Vec<_> = (0..unnamed.unnamed.len()).map(Index::from).collect();
            let names: Vec<_> = (0..unnamed.unnamed.len())
                .map(|i| format_ident!("field_{}", i))
                .collect();
            let copies = idx
                .iter()
                .zip(&modes)
                .map(|(i, m)| copy_field(quote! { self.#i }, *m));
            (
                quote! { Self( #( #copies ),* ) },
                Some((quote! { Self( #( #names ),* ) }, names)),
            )
        }
        Fields::Unit => (quote! { Self }, None),
    };

    let destroy_body = match (&opts.destroy, bindings) {
        (Some(hook), _) => quote! { #hook(self); },
        (None, Some((pattern, names))) => {
            let releases = names.iter().zip(&modes).map(|(n, m)| release_field(n, *m));
            quote! {
                let #pattern = self;
                #( #releases )*
            }
        }
        (None, None) => quote! { let _ = self; },
    };

    Ok(quote! {
        impl #impl_generics #krate::Element for #ident #ty_generics #where_clause {
            fn copy_element(&self) -> Self {
                #copy_body
            }

            fn destroy_element(self) {
                #destroy_body
            }
        }
    })
}

/// Derives `linked_core::Element` for a struct.
///
/// By default every field is copied and released through its own `Element`
/// impl. Options:
///
/// - `#[element(shallow)]` on the struct: flat copy, requires `Copy`
/// - `#[element(destroy = path)]` on the struct: `path(self)` replaces the
///   field-wise release
/// - `#[element(crate = "path")]` on the struct: where `Element` lives
/// - `#[element(shallow)]` / `#[element(clone)]` on a field: copy that field
///   bitwise / through `Clone` instead of `Element`
///
/// # Crate path
///
/// The generated impl names `::linked_core::Element`. A crate that only
/// depends on the `linear_ds` umbrella has no `linked_core` in scope and must
/// point the derive at the re-export:
///
/// ```ignore
/// use linear_ds::prelude::*;
///
/// #[derive(Element)]
/// #[element(crate = "linear_ds")]
/// struct Job {
///     id: u32,
///     name: String,
/// }
/// ```
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
