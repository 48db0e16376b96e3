use crate::values::core_value::CoreValue;
use crate::values::core_values::complex::TypedComplex;
use crate::values::core_values::decimal::typed_decimal::TypedDecimal;
use crate::values::core_values::integer::typed_integer::TypedInteger;
use crate::values::core_values::reference::{Reference, ReferenceKind};
use crate::values::core_values::sequence::Sequence;
use crate::values::value::{AsValue, Value};
use core::any::Any;
use core::fmt::Debug;
use core::mem::size_of_val;
use core::ptr::NonNull;
use num::complex::{Complex32, Complex64};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::Boolean(*self))
    }
}

macro_rules! typed_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsValue for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::of::<Self>(CoreValue::TypedInteger(
                        TypedInteger::from(*self),
                    ))
                }
            }
        )*
    };
}

typed_integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsValue for f32 {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::TypedDecimal(TypedDecimal::from(*self)))
    }
}
impl AsValue for f64 {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::TypedDecimal(TypedDecimal::from(*self)))
    }
}

impl AsValue for Complex32 {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::TypedComplex(TypedComplex::from(*self)))
    }
}
impl AsValue for Complex64 {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::TypedComplex(TypedComplex::from(*self)))
    }
}

// text

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::Text(self))
    }
}
impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::Text(self.as_str()))
    }
}
impl AsValue for Cow<'_, str> {
    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::Text(&**self))
    }
}

// sequences

impl AsValue for [u8] {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Sequence);

    fn as_value(&self) -> Value<'_> {
        Value::of::<Self>(CoreValue::Sequence(Sequence::Bytes(self)))
    }
}

impl<T: Any + Debug + PartialEq> AsValue for Vec<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Sequence);

    fn as_value(&self) -> Value<'_> {
        let sequence = match (self as &dyn Any).downcast_ref::<Vec<u8>>() {
            Some(bytes) => Sequence::Bytes(bytes.as_slice()),
            None => Sequence::Elements(self),
        };
        Value::of::<Self>(CoreValue::Sequence(sequence))
    }
}

// fixed-size arrays are aggregates, byte arrays still compare element-wise

impl<T: Any + Debug + PartialEq, const N: usize> AsValue for [T; N] {
    fn as_value(&self) -> Value<'_> {
        match (self as &dyn Any).downcast_ref::<[u8; N]>() {
            Some(bytes) => Value::of::<Self>(CoreValue::Bytes(bytes.as_slice())),
            None => Value::opaque(self),
        }
    }
}

// borrows classify as their referent

impl<T: AsValue + ?Sized> AsValue for &T {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}
impl<T: AsValue + ?Sized> AsValue for &mut T {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

/// `Some` classifies as its content, `None` is the nil state of the content's
/// reference kind, or of a dynamic holder for value types.
impl<T: AsValue> AsValue for Option<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Holder);

    fn as_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.as_value(),
            None => Value::of::<Self>(CoreValue::Reference(Reference::nil(
                T::NIL_KIND.unwrap_or(ReferenceKind::Holder),
            ))),
        }
    }
}

// pointers

fn reference<T: ?Sized, P: ?Sized>(
    kind: ReferenceKind,
    target: *const P,
) -> Value<'static> {
    Value::of::<T>(CoreValue::Reference(Reference::to(kind, target)))
}

impl<T: ?Sized> AsValue for Box<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        // boxed zero-sized values share one dangling address, the box itself is unique
        if size_of_val(&**self) == 0 {
            reference::<Self, Self>(ReferenceKind::Pointer, self)
        } else {
            reference::<Self, T>(ReferenceKind::Pointer, &**self as *const T)
        }
    }
}
impl<T: ?Sized> AsValue for Rc<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, T>(ReferenceKind::Pointer, Rc::as_ptr(self))
    }
}
impl<T: ?Sized> AsValue for Arc<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, T>(ReferenceKind::Pointer, Arc::as_ptr(self))
    }
}
impl<T: ?Sized> AsValue for NonNull<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, T>(ReferenceKind::Pointer, self.as_ptr())
    }
}
impl<T: ?Sized> AsValue for *const T {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, T>(ReferenceKind::Pointer, *self)
    }
}
impl<T: ?Sized> AsValue for *mut T {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Pointer);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, T>(ReferenceKind::Pointer, *self)
    }
}

// functions

macro_rules! function_value {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> AsValue for fn($($arg),*) -> R {
            const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Function);

            fn as_value(&self) -> Value<'_> {
                reference::<Self, ()>(ReferenceKind::Function, *self as *const ())
            }
        }
    };
}

function_value!();
function_value!(A);
function_value!(A, B);
function_value!(A, B, C);
function_value!(A, B, C, D);

// channel handles and maps are compared by the location of the handle

impl<T> AsValue for Sender<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Channel);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Channel, self)
    }
}
impl<T> AsValue for SyncSender<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Channel);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Channel, self)
    }
}
impl<T> AsValue for Receiver<T> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Channel);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Channel, self)
    }
}

impl<K, V, S> AsValue for HashMap<K, V, S> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Map);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Map, self)
    }
}
impl<K, V> AsValue for BTreeMap<K, V> {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Map);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Map, self)
    }
}

impl AsValue for dyn Any {
    const NIL_KIND: Option<ReferenceKind> = Some(ReferenceKind::Holder);

    fn as_value(&self) -> Value<'_> {
        reference::<Self, Self>(ReferenceKind::Holder, self)
    }
}
