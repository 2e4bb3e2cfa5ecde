//! Attribute macro behind `wireval-testhelpers`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // Attributes, visibility, `async`/`unsafe`: everything before `fn`.
    struct Prelude {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    // Arguments and return type: everything before the body.
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        prelude: Prelude, _fn: KFn, name: Ident,
        signature: Signature, body: Body
    }
}

impl quote::ToTokens for Prelude {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Test attribute that runs `wireval_testhelpers::setup()` before the body.
///
/// ```ignore
/// #[wireval_testhelpers::test]
/// fn grows_on_demand() {
///     // backtraces and tracing are already installed here
/// }
/// ```
///
/// An argument substitutes the inner test attribute, for harnesses with their
/// own entry points:
/// ```ignore
/// #[wireval_testhelpers::test(tokio::test)]
/// async fn async_case() {}
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let TestFn {
        prelude,
        _fn,
        name,
        signature,
        body,
    } = tokens.parse::<TestFn>().unwrap();

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #prelude fn #name #signature {
            ::wireval_testhelpers::setup();

            #body
        }
    }
    .into()
}
