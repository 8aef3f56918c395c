use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[ncraft_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            input.sig.fn_token,
            "#[ncraft_runtime::main] can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[ncraft_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match parse_profile(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::ncraft_runtime::build_runtime(&#profile)?;
            runtime.block_on(async move #block)
        }
    }
}

fn parse_profile(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::ncraft_runtime::RuntimeProfile::default() });
    }

    let ident: syn::Ident = syn::parse2(args)?;
    match ident.to_string().as_str() {
        "current_thread" => Ok(quote! { ::ncraft_runtime::RuntimeProfile::current_thread() }),
        "multi_thread" => Ok(quote! { ::ncraft_runtime::RuntimeProfile::multi_thread() }),
        _ => Err(Error::new_spanned(
            ident,
            "unknown runtime profile, expected `current_thread` or `multi_thread`",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
