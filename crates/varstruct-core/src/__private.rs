//! Support items referenced by `#[varstruct]` expansions. Not public API.

use crate::traits::VarStruct;
use std::marker::PhantomData;

//
// Default value probe
//
// `(&Probe::<T>::new()).default_value()` resolves to
// `T::default_initialized()` when `T` is a varstruct and to `T::default()`
// otherwise.
//

pub struct Probe<T>(PhantomData<fn() -> T>);

impl<T> Probe<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

pub trait ViaVarStruct {
    type Value;

    fn default_value(&self) -> Self::Value;
}

impl<T: VarStruct> ViaVarStruct for Probe<T> {
    type Value = T;

    fn default_value(&self) -> T {
        T::default_initialized()
    }
}

pub trait ViaDefault {
    type Value;

    fn default_value(&self) -> Self::Value;
}

impl<T: Default> ViaDefault for &Probe<T> {
    type Value = T;

    fn default_value(&self) -> T {
        T::default()
    }
}

//
// Struct detection
//

pub struct IsVarStruct<T: ?Sized>(PhantomData<T>);

pub trait NotVarStruct {
    const VALUE: bool = false;
}

impl<T: ?Sized> NotVarStruct for T {}

impl<T: VarStruct> IsVarStruct<T> {
    pub const VALUE: bool = true;
}

///
/// TESTS
///
