use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parenthesized,
    parse::{Parse, ParseStream, Result},
    parse_macro_input,
    punctuated::Punctuated,
    Data, DeriveInput, Expr, Fields, Ident, LitInt, LitStr, Token, Type,
};

enum Entry {
    Default(Expr),
    Field(Field),
}

struct Field {
    name: Ident,
    read: bool,
    write: bool,
    offset: LitInt,
    width: Option<LitInt>,
    doc: Option<LitStr>,
}

impl Parse for Entry {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let name = input.parse::<Ident>()?;
        if input.peek(Token![=]) {
            if name != "default" {
                return Err(input.error("expected `default`"));
            }
            input.parse::<Token![=]>()?;
            return Ok(Self::Default(input.parse()?));
        }
        let content;
        parenthesized!(content in input);
        let mode = content.parse::<Ident>()?;
        let (read, write) = match mode.to_string().as_str() {
            "r" | "w1c" => (true, false),
            "w" => (false, true),
            "rw" => (true, true),
            _ => return Err(syn::Error::new(mode.span(), "expected `r`, `w`, `rw`, or `w1c`")),
        };
        content.parse::<Token![,]>()?;
        let offset = content.parse::<LitInt>()?;
        let mut width = None;
        let mut doc = None;
        if content.peek(Token![,]) {
            content.parse::<Token![,]>()?;
            if content.peek(LitInt) {
                width = Some(content.parse()?);
                if content.peek(Token![,]) {
                    content.parse::<Token![,]>()?;
                    doc = Some(content.parse()?);
                }
            } else {
                doc = Some(content.parse()?);
            }
        }
        Ok(Self::Field(Field { name, read, write, offset, width, doc }))
    }
}

pub fn proc_macro_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let bits = match bits_type(&input) {
        Ok(bits) => bits,
        Err(err) => return err.to_compile_error().into(),
    };
    let mut default = None;
    let mut fields = Vec::new();
    for attr in &input.attrs {
        if !attr.path.is_ident("bitfield") {
            continue;
        }
        let entries = match attr.parse_args_with(Punctuated::<Entry, Token![,]>::parse_terminated)
        {
            Ok(entries) => entries,
            Err(err) => return err.to_compile_error().into(),
        };
        for entry in entries {
            match entry {
                Entry::Default(lit) => default = Some(lit),
                Entry::Field(field) => fields.push(field),
            }
        }
    }
    let default = default.map_or_else(|| quote!(0), |expr| quote!(#expr));
    let field_tokens = fields.iter().map(|field| field_methods(field, bits));
    let expanded = quote! {
        impl ::sial::bitfield::Bitfield for #name {
            type Bits = #bits;

            const DEFAULT: #bits = #default;

            #[inline]
            unsafe fn from_bits(bits: #bits) -> Self {
                Self(bits)
            }

            #[inline]
            fn bits(&self) -> #bits {
                self.0
            }

            #[inline]
            fn bits_mut(&mut self) -> &mut #bits {
                &mut self.0
            }
        }

        #[allow(missing_docs)]
        impl #name {
            #(#field_tokens)*
        }
    };
    expanded.into()
}

fn bits_type(input: &DeriveInput) -> Result<&Type> {
    if let Data::Struct(data) = &input.data {
        if let Fields::Unnamed(fields) = &data.fields {
            if fields.unnamed.len() == 1 {
                return Ok(&fields.unnamed[0].ty);
            }
        }
    }
    Err(syn::Error::new_spanned(
        input,
        "Bitfield can be derived only for a tuple struct with one field",
    ))
}

fn field_methods(field: &Field, bits: &Type) -> TokenStream2 {
    let Field { name, read, write, offset, width, doc } = field;
    let doc = doc.iter();
    let attrs = quote!(#(#[doc = #doc])* #[inline]);
    let mut methods = TokenStream2::new();
    match width {
        None => {
            if *read {
                methods.extend(quote! {
                    #attrs
                    pub fn #name(&self) -> bool {
                        unsafe { ::sial::bitfield::Bitfield::read_bit(self, #offset as #bits) }
                    }
                });
            }
            if *write {
                let set = format_ident!("set_{}", name);
                let clear = format_ident!("clear_{}", name);
                let toggle = format_ident!("toggle_{}", name);
                methods.extend(quote! {
                    #attrs
                    pub fn #set(&mut self) -> &mut Self {
                        unsafe { ::sial::bitfield::Bitfield::set_bit(self, #offset as #bits) };
                        self
                    }

                    #attrs
                    pub fn #clear(&mut self) -> &mut Self {
                        unsafe { ::sial::bitfield::Bitfield::clear_bit(self, #offset as #bits) };
                        self
                    }

                    #attrs
                    pub fn #toggle(&mut self) -> &mut Self {
                        unsafe { ::sial::bitfield::Bitfield::toggle_bit(self, #offset as #bits) };
                        self
                    }
                });
            }
        }
        Some(width) => {
            if *read {
                methods.extend(quote! {
                    #attrs
                    pub fn #name(&self) -> #bits {
                        unsafe {
                            ::sial::bitfield::Bitfield::read_bits(
                                self,
                                #offset as #bits,
                                #width as #bits,
                            )
                        }
                    }
                });
            }
            if *write {
                let write_name = format_ident!("write_{}", name);
                methods.extend(quote! {
                    #attrs
                    pub fn #write_name(&mut self, bits: #bits) -> &mut Self {
                        unsafe {
                            ::sial::bitfield::Bitfield::write_bits(
                                self,
                                #offset as #bits,
                                #width as #bits,
                                bits,
                            );
                        }
                        self
                    }
                });
            }
        }
    }
    methods
}
