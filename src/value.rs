use std::{
    any::Any,
    fmt::{self, Formatter},
};

/// Capability bundle for values that can travel inside an
/// [`Invocation`](crate::Invocation).
///
/// Blanket-implemented for every `'static` type that is [`fmt::Debug`],
/// [`PartialEq`], [`Clone`] and [`Send`]; it is never implemented by
/// hand. The hidden methods let [`Value`] compare and clone values
/// behind type erasure.
pub trait ArgValue: Any + fmt::Debug + Send {
    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;
    #[doc(hidden)]
    fn dyn_eq(&self, other: &dyn ArgValue) -> bool;
    #[doc(hidden)]
    fn dyn_clone(&self) -> Box<dyn ArgValue>;
}

impl<T> ArgValue for T
where
    T: Any + fmt::Debug + PartialEq + Clone + Send,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn ArgValue) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn dyn_clone(&self) -> Box<dyn ArgValue> {
        Box::new(self.clone())
    }
}

/// An owned, type-erased argument value.
///
/// Values of different concrete types never compare equal, even when
/// their renderings agree.
///
/// ```
/// use dynamock::Value;
///
/// let value = Value::of(42);
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value, Value::of(42));
/// assert_ne!(value, Value::of(42i64));
/// ```
pub struct Value(Box<dyn ArgValue>);

impl Value {
    /// Erases the type of `value`.
    pub fn of<T: ArgValue>(value: T) -> Self {
        Value(Box::new(value))
    }

    /// Returns a reference to the held value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Whether the held value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value(self.0.dyn_clone())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.0.dyn_eq(other.0.as_ref())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
