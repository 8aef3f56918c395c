use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident};
use syn::{PathArguments, Type, Variant};

const INTERNAL: &str = "Internal";

/// What the generator needs to know about a single enum variant.
struct VariantSpec<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfgs: Vec<&'a Attribute>,
}

impl VariantSpec<'_> {
    fn is_internal(&self) -> bool {
        self.ident == INTERNAL
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "ncraft_error can only be applied to enums")
            .to_compile_error();
    };

    let specs = match data.variants.iter().map(collect_variant).collect::<Result<Vec<_>, _>>() {
        Ok(specs) => specs,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(orphan) = specs.iter().find(|s| s.source.is_some() && !s.has_context) {
        return syn::Error::new_spanned(
            orphan.ident,
            "ncraft_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &specs);
    let conversions = specs.iter().filter(|s| !s.is_internal()).filter_map(|s| {
        let (field, ty) = s.source?;
        Some(source_conversion(name, &ext, s, field, ty))
    });
    let messages = specs.iter().find(|s| s.is_internal()).map(|s| message_conversions(name, s));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#conversions)*
        #messages

        #[allow(dead_code)]
        fn format_context(context: &Option<::std::borrow::Cow<'static, str>>) -> ::std::borrow::Cow<'static, str> {
            match context {
                Some(c) => ::std::borrow::Cow::Owned(format!(" ({c})")),
                None => ::std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn collect_variant(variant: &Variant) -> syn::Result<VariantSpec<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "ncraft_error variants must use named fields (`source`, `message`, `context`)",
        ));
    };

    let context = context_field(fields)?;
    let source = fields
        .named
        .iter()
        .find(|f| is_named(f, "source") || has_attr(f, "source") || has_attr(f, "from"))
        .and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));

    Ok(VariantSpec {
        ident: &variant.ident,
        source,
        has_context: context.is_some(),
        cfgs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
    })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| is_named(f, "context")) else {
        return Ok(None);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn context_trait(name: &Ident, ext: &Ident, specs: &[VariantSpec<'_>]) -> TokenStream {
    let arms = specs.iter().filter(|s| s.has_context).map(|s| {
        let ident = s.ident;
        let cfgs = &s.cfgs;
        quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_conversion(
    name: &Ident,
    ext: &Ident,
    spec: &VariantSpec<'_>,
    field: &Ident,
    ty: &Type,
) -> TokenStream {
    let variant = spec.ident;
    let cfgs = &spec.cfgs;

    quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#variant { #field, context: None }
            }
        }

        #(#cfgs)*
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> ::std::result::Result<T, #name> {
                self.map_err(|#field| #name::#variant { #field, context: Some(context.into()) })
            }
        }
    }
}

fn message_conversions(name: &Ident, internal: &VariantSpec<'_>) -> TokenStream {
    let cfgs = &internal.cfgs;

    quote! {
        #(#cfgs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfgs)*
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// `Debug` and `thiserror::Error` unless the enum already derives them.
fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    if wanted.is_empty() { quote!() } else { quote! { #[derive(#(#wanted),*)] } }
}

fn is_named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == name)
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Matches `Option<Cow<'static, str>>` with any path prefix.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(cow) = single_type_arg(ty, "Option") else {
        return false;
    };
    let Some(args) = angle_args(cow, "Cow") else {
        return false;
    };

    let mut args = args.iter();
    let lifetime_ok =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_ok = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );

    lifetime_ok && str_ok && args.next().is_none()
}

fn angle_args<'a>(
    ty: &'a Type,
    ident: &str,
) -> Option<&'a syn::punctuated::Punctuated<GenericArgument, syn::Token![,]>> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != ident {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}

fn single_type_arg<'a>(ty: &'a Type, ident: &str) -> Option<&'a Type> {
    match angle_args(ty, ident)?.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
