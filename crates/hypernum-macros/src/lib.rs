extern crate proc_macro;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{bracketed, parse_macro_input, Fields, GenericParam, Ident, ItemStruct, LitInt, Token};

/// One cell of the multiplication table: `0`, `unit` or `-unit`
enum Entry {
    Zero,
    Unit { negated: bool, unit: Ident },
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitInt) {
            let lit: LitInt = input.parse()?;
            if lit.base10_parse::<isize>()? != 0 {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected `0`, `unit`, or `-unit`",
                ));
            }
            return Ok(Entry::Zero);
        }
        let negated = input.peek(Token![-]);
        if negated {
            input.parse::<Token![-]>()?;
        }
        Ok(Entry::Unit {
            negated,
            unit: input.parse()?,
        })
    }
}

struct Row(Vec<Entry>);

impl Parse for Row {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        bracketed!(content in input);
        let entries = Punctuated::<Entry, Token![,]>::parse_terminated(&content)?;
        Ok(Row(entries.into_iter().collect()))
    }
}

struct Input {
    table: Vec<Row>,
    item: ItemStruct,
}

impl Parse for Input {
    fn parse(input: ParseStream) -> Result<Self> {
        let keyword: Ident = input.parse()?;
        if keyword != "table" {
            return Err(syn::Error::new(keyword.span(), "expected `table![...];`"));
        }
        input.parse::<Token![!]>()?;
        let content;
        bracketed!(content in input);
        let rows = Punctuated::<Row, Token![,]>::parse_terminated(&content)?;
        input.parse::<Token![;]>()?;
        let item = input.parse()?;
        Ok(Input {
            table: rows.into_iter().collect(),
            item,
        })
    }
}

/// The struct to emit, plus everything needed to generate its arithmetic
struct Algebra {
    item: ItemStruct,
    /// Fields holding a coefficient of type T, real unit first
    components: Vec<Ident>,
    /// Fields that take no part in the arithmetic
    cosmetic: Vec<Ident>,
    /// For each output component u,
    /// every (negated, r, s) such that unit_r * unit_s = ±unit_u
    products: Vec<Vec<(bool, usize, usize)>>,
    /// Whether every imaginary unit squares to -1,
    /// making the sum of squares a multiplicative norm
    euclidean: bool,
    /// Whether the table is symmetric, so that unit_r * unit_s = unit_s * unit_r
    commutative: bool,
}

fn analyze(input: Input) -> Result<Algebra> {
    let Input { table, mut item } = input;

    match item.generics.params.first() {
        Some(GenericParam::Type(param))
            if item.generics.params.len() == 1 && param.ident == "T" => {}
        _ => {
            return Err(syn::Error::new(
                item.ident.span(),
                "algebra structs must have a single generic parameter named T",
            ))
        }
    }

    let Fields::Named(fields) = &mut item.fields else {
        return Err(syn::Error::new(
            item.ident.span(),
            "algebra structs must have named fields",
        ));
    };

    let mut components = vec![];
    let mut cosmetic = vec![];
    for field in fields.named.iter_mut() {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        // Strip the #[cosmetic] pseudo-attribute so the struct can be emitted verbatim
        let attr_count = field.attrs.len();
        field.attrs.retain(|attr| !attr.path().is_ident("cosmetic"));
        if field.attrs.len() != attr_count {
            cosmetic.push(ident);
        } else {
            components.push(ident);
        }
    }

    let n = components.len();
    if n == 0 {
        return Err(syn::Error::new(
            item.ident.span(),
            "algebra structs need at least one component",
        ));
    }
    if table.len() != n {
        return Err(syn::Error::new(
            item.ident.span(),
            format!(
                "expected a {}x{} multiplication table, found {} rows",
                n,
                n,
                table.len()
            ),
        ));
    }

    let mut products = vec![vec![]; n];
    let mut squares = vec![None; n];
    for (r, Row(row)) in table.iter().enumerate() {
        if row.len() != n {
            return Err(syn::Error::new(
                item.ident.span(),
                format!(
                    "row {} of the multiplication table has {} entries, expected {}",
                    r,
                    row.len(),
                    n
                ),
            ));
        }
        for (s, entry) in row.iter().enumerate() {
            let (negated, unit) = match entry {
                Entry::Unit { negated, unit } => (negated, unit),
                Entry::Zero if r == 0 || s == 0 => {
                    return Err(syn::Error::new(
                        item.ident.span(),
                        "the first row and column must be the identity, not `0`",
                    ))
                }
                Entry::Zero => continue,
            };
            let Some(u) = components.iter().position(|c| c == unit) else {
                return Err(syn::Error::new(
                    unit.span(),
                    format!("`{}` is not a component of `{}`", unit, item.ident),
                ));
            };

            // The first component is the real unit, so it must act as the identity
            if (r == 0 || s == 0) && (*negated || u != r.max(s)) {
                return Err(syn::Error::new(
                    unit.span(),
                    format!(
                        "the first row and column must be the identity: expected `{}`",
                        components[r.max(s)]
                    ),
                ));
            }

            if r == s {
                squares[r] = Some((*negated, u));
            }
            products[u].push((*negated, r, s));
        }
    }

    let euclidean = squares
        .iter()
        .skip(1)
        .all(|square| *square == Some((true, 0)));
    let commutative = products
        .iter()
        .all(|terms| terms.iter().all(|&(neg, r, s)| terms.contains(&(neg, s, r))));

    Ok(Algebra {
        item,
        components,
        cosmetic,
        products,
        euclidean,
        commutative,
    })
}

fn gen_algebra(algebra: &Algebra) -> TokenStream {
    let Algebra {
        item,
        components,
        cosmetic,
        products,
        euclidean,
        commutative,
    } = algebra;

    let name = &item.ident;
    let real = &components[0];
    let imaginary = &components[1..];

    // Cosmetic fields follow the left-hand operand
    let keep_cosmetic = quote! { #(#cosmetic: self.#cosmetic,)* };

    let componentwise = |op_trait: TokenStream, op_fn: TokenStream, op: TokenStream| {
        quote! {
            impl<T: Ring> #op_trait<#name<T>> for #name<T> {
                type Output = #name<T>;
                fn #op_fn(self, r: #name<T>) -> #name<T> {
                    #name {
                        #(#components: self.#components #op r.#components,)*
                        #keep_cosmetic
                    }
                }
            }
        }
    };
    let add_code = componentwise(quote! { core::ops::Add }, quote! { add }, quote! { + });
    let sub_code = componentwise(quote! { core::ops::Sub }, quote! { sub }, quote! { - });

    // Build each output coefficient of the product as a sum of signed terms,
    // in row-major order of the multiplication table
    let product_exprs: Vec<TokenStream> = products
        .iter()
        .map(|terms| {
            if terms.is_empty() {
                return quote! { T::zero() };
            }
            let mut expr = TokenStream::new();
            for (count, &(negated, r, s)) in terms.iter().enumerate() {
                let a = &components[r];
                let b = &components[s];
                let term = quote! { self.#a * r.#b };
                expr.extend(match (count, negated) {
                    (0, false) => term,
                    (0, true) => quote! { -(#term) },
                    (_, false) => quote! { + #term },
                    (_, true) => quote! { - #term },
                });
            }
            expr
        })
        .collect();

    let ring_code = quote! {
        impl<T: Ring> #name<T> {
            /// Construct a value from its components
            pub fn new(#(#components: T),*) -> #name<T> {
                #name {
                    #(#components,)*
                    #(#cosmetic: Default::default(),)*
                }
            }
        }

        impl<T: Ring> PartialEq for #name<T> {
            fn eq(&self, r: &#name<T>) -> bool {
                true #(&& self.#components == r.#components)*
            }
        }

        #add_code
        #sub_code

        impl<T: Ring> core::ops::Neg for #name<T> {
            type Output = #name<T>;
            fn neg(self) -> #name<T> {
                #name {
                    #(#components: -self.#components,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring> core::ops::Add<T> for #name<T> {
            type Output = #name<T>;
            fn add(self, r: T) -> #name<T> {
                #name {
                    #real: self.#real + r,
                    #(#imaginary: self.#imaginary,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring> core::ops::Sub<T> for #name<T> {
            type Output = #name<T>;
            fn sub(self, r: T) -> #name<T> {
                #name {
                    #real: self.#real - r,
                    #(#imaginary: self.#imaginary,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring> core::ops::Mul<T> for #name<T> {
            type Output = #name<T>;
            fn mul(self, r: T) -> #name<T> {
                #name {
                    #(#components: self.#components * r,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring> core::ops::Mul<#name<T>> for #name<T> {
            type Output = #name<T>;
            fn mul(self, r: #name<T>) -> #name<T> {
                #name {
                    #(#components: #product_exprs,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring> Conjugate for #name<T> {
            type Output = #name<T>;
            fn conjugate(self) -> #name<T> {
                #name {
                    #real: self.#real,
                    #(#imaginary: -self.#imaginary,)*
                    #keep_cosmetic
                }
            }
        }

        impl<T: Ring + PartialOrd> #name<T> {
            /// Compare componentwise, allowing each component to differ by up to `tolerance`
            pub fn abs_diff_eq(self, r: #name<T>, tolerance: T) -> bool {
                true #(&& (self.#components - r.#components).abs() <= tolerance)*
            }
        }

        impl<T: Field> core::ops::Div<T> for #name<T> {
            type Output = #name<T>;
            fn div(self, r: T) -> #name<T> {
                #name {
                    #(#components: self.#components / r,)*
                    #keep_cosmetic
                }
            }
        }
    };

    // A commutative algebra divides by the squared norm last,
    // ((a·c + b·d) + (b·c − a·d)i) / (c² + d²) for complex numbers.
    // Otherwise p / q is right division by the reciprocal.
    let div_code = if *commutative {
        quote! {
            impl<T: Field> core::ops::Div<#name<T>> for #name<T> {
                type Output = #name<T>;
                fn div(self, r: #name<T>) -> #name<T> {
                    (self * r.conjugate()) / r.norm_squared()
                }
            }
        }
    } else {
        quote! {
            impl<T: Field> core::ops::Div<#name<T>> for #name<T> {
                type Output = #name<T>;
                fn div(self, r: #name<T>) -> #name<T> {
                    self * r.reciprocal()
                }
            }
        }
    };

    // Norms and inverses only make sense when the sum of squares is multiplicative
    let norm_code = if *euclidean {
        quote! {
            impl<T: Ring> NormSquared for #name<T> {
                type Output = T;
                fn norm_squared(self) -> T {
                    #(self.#components * self.#components)+*
                }
            }

            impl<T: Ring + Sqrt<Output = T>> Norm for #name<T> {
                type Output = T;
                fn norm(self) -> T {
                    self.norm_squared().sqrt()
                }
            }

            impl<T: Field> Reciprocal for #name<T> {
                type Output = #name<T>;
                fn reciprocal(self) -> #name<T> {
                    self.conjugate() / self.norm_squared()
                }
            }

            #div_code
        }
    } else {
        quote! {}
    };

    quote! {
        #item
        #ring_code
        #norm_code
    }
}

/// Generate the arithmetic of a hypercomplex number struct
/// from the multiplication table of its units
///
/// See `hypernum::cayley_algebra` for documentation.
#[proc_macro]
pub fn cayley_algebra(input_tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input_tokens as Input);

    match analyze(input) {
        Ok(algebra) => gen_algebra(&algebra).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
