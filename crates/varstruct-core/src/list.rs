//!
//! Heterogeneous argument and value lists.
//!
//! Positional construction and whole-struct decomposition both work on a
//! cons list (`HCons<Head, Tail>` terminated by `HNil`). Tuples up to
//! `MAX_TUPLE_ARITY` elements convert to and from lists; longer lists are
//! written with `hlist![..]`.
//!

///
/// MAX_TUPLE_ARITY
///

pub const MAX_TUPLE_ARITY: usize = 16;

///
/// HNil
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct HNil;

///
/// HCons
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

///
/// HList
///

pub trait HList {
    const LEN: usize;
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
}

///
/// Concat
///

pub trait Concat<R> {
    type Output;

    fn concat(self, rhs: R) -> Self::Output;
}

impl<R> Concat<R> for HNil {
    type Output = R;

    fn concat(self, rhs: R) -> R {
        rhs
    }
}

impl<H, T: Concat<R>, R> Concat<R> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn concat(self, rhs: R) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

///
/// Exhausted
/// Implemented only by `HNil`: every argument has been consumed.
///

#[diagnostic::on_unimplemented(
    message = "invalid arguments count in variadic struct constructor",
    label = "more positional arguments than the struct has fields",
    note = "the arguments left over after construction are `{Self}`"
)]
pub trait Exhausted {}

impl Exhausted for HNil {}

///
/// IntoHList
///

pub trait IntoHList {
    type List;

    fn into_hlist(self) -> Self::List;
}

impl IntoHList for HNil {
    type List = Self;

    fn into_hlist(self) -> Self {
        self
    }
}

impl<H, T> IntoHList for HCons<H, T> {
    type List = Self;

    fn into_hlist(self) -> Self {
        self
    }
}

///
/// IntoTuple
///

pub trait IntoTuple {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

/// Build an `HCons` list value.
#[macro_export]
macro_rules! hlist {
    () => { $crate::list::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::list::HCons {
            head: $head,
            tail: $crate::hlist!($($tail),*),
        }
    };
}

macro_rules! hlist_type {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons<$head, hlist_type!($($tail),*)> };
}

macro_rules! hlist_pat {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => {
        HCons {
            head: $head,
            tail: hlist_pat!($($tail),*),
        }
    };
}

macro_rules! impl_tuple_conversions {
    ($($name:ident),*) => {
        impl<$($name),*> IntoHList for ($($name,)*) {
            type List = hlist_type!($($name),*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_hlist(self) -> Self::List {
                let ($($name,)*) = self;

                hlist_pat!($($name),*)
            }
        }

        impl<$($name),*> IntoTuple for hlist_type!($($name),*) {
            type Tuple = ($($name,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($name),*) = self;

                ($($name,)*)
            }
        }
    };
}

impl_tuple_conversions!();
impl_tuple_conversions!(A0);
impl_tuple_conversions!(A0, A1);
impl_tuple_conversions!(A0, A1, A2);
impl_tuple_conversions!(A0, A1, A2, A3);
impl_tuple_conversions!(A0, A1, A2, A3, A4);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
impl_tuple_conversions!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);

///
/// TESTS
///
