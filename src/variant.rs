use crate::canonical::{Canonical, ConstRef, TypeKey};
use crate::error::VariantError;
use crate::holder::{Holder, ValueHolder};
use log::{debug, trace};
use std::fmt;

/// A container that holds zero or one value of any type decided at the call site
///
/// The stored type is erased; a caller gets the value back only by naming the same type.
/// Cloning a `Variant` deep-copies the held value, so two clones never share storage.
///
/// # Examples
///
/// ```
/// use sovran_variant::Variant;
///
/// let mut a = Variant::with_value(42i32);
/// let mut b = a.clone();
/// b.set_value(7i32);
///
/// assert_eq!(*a.value::<i32>(), 42);
/// assert_eq!(*b.value::<i32>(), 7);
///
/// let c = a.take();
/// assert!(a.is_empty());
/// assert_eq!(*c.value::<i32>(), 42);
/// ```
#[derive(Default)]
pub struct Variant {
    holder: Option<Box<dyn Holder>>,
}

impl Variant {
    /// Creates an empty Variant
    pub fn new() -> Self {
        Self { holder: None }
    }

    /// Creates a Variant holding `value`, moved in
    pub fn with_value<T: Canonical>(value: T) -> Self {
        Self {
            holder: Some(ValueHolder::<T>::boxed(value)),
        }
    }

    /// Creates a Variant holding a copy of a borrowed value
    ///
    /// Stores `T`, not `&T`, so the result is identical to `Variant::with_value(value.clone())`.
    pub fn from_ref<T: Canonical>(value: &T) -> Self {
        Self::with_value(value.clone())
    }

    /// Creates a Variant whose stored type is the explicitly named `T`
    ///
    /// Use this when the argument's own type is not the type that should be stored, such as a
    /// string literal that should be kept as an owned `String`.
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let v = Variant::from_value::<String>("hello");
    /// assert!(v.is_type::<String>());
    /// assert_eq!(v.value::<String>(), "hello");
    /// ```
    pub fn from_value<T: Canonical>(value: impl Into<T>) -> Self {
        Self {
            holder: Some(ValueHolder::<T>::boxed(value)),
        }
    }

    /// Creates a Variant from a value built by `f`
    pub fn new_with<T, F>(f: F) -> Self
    where
        T: Canonical,
        F: FnOnce() -> T,
    {
        Self::with_value(f())
    }

    /// Returns true if the Variant holds no value
    pub fn is_empty(&self) -> bool {
        self.holder.is_none()
    }

    /// Returns true if the Variant holds a value of type `T`
    pub fn is_type<T: Canonical>(&self) -> bool {
        self.type_key().is_some_and(|key| key.is::<T>())
    }

    /// The dynamic type of the held value, if any
    pub fn type_key(&self) -> Option<TypeKey> {
        self.holder.as_deref().map(|holder| holder.type_key())
    }

    /// The name of the held value's type, if any
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_key().map(|key| key.name())
    }

    /// Returns a reference to the held value
    ///
    /// # Panics
    ///
    /// Requesting a type other than the one stored, or reading an empty Variant, is a
    /// contract violation and panics. Use [`try_value`](Self::try_value) when the stored type
    /// is not known up front.
    #[track_caller]
    pub fn value<T: Canonical>(&self) -> ConstRef<'_, T> {
        match self.try_value::<T>() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns a reference to the held value, or why it cannot be read as `T`
    ///
    /// # Errors
    ///
    /// - Returns `VariantError::Empty` if nothing is stored
    /// - Returns `VariantError::TypeMismatch` if a different type is stored
    pub fn try_value<T: Canonical>(&self) -> Result<ConstRef<'_, T>, VariantError> {
        let requested = TypeKey::of::<T>();
        let Some(holder) = self.holder.as_deref() else {
            debug!("read of empty Variant as {}", requested);
            return Err(VariantError::Empty { requested });
        };
        holder.downcast_ref::<T>().ok_or_else(|| {
            let found = holder.type_key();
            debug!("Variant holds {}, requested {}", found, requested);
            VariantError::TypeMismatch { requested, found }
        })
    }

    /// Replaces whatever is held with `value`
    ///
    /// The previous value is dropped, and the dynamic type becomes `T`.
    pub fn set_value<T: Canonical>(&mut self, value: T) {
        self.install(ValueHolder::<T>::boxed(value));
    }

    /// Replaces whatever is held with a value of the explicitly named type `T`
    pub fn set_from<T: Canonical>(&mut self, value: impl Into<T>) {
        self.install(ValueHolder::<T>::boxed(value));
    }

    /// Moves the held value out into a new Variant, leaving this one empty
    pub fn take(&mut self) -> Variant {
        Variant {
            holder: self.holder.take(),
        }
    }

    /// Drops the held value, if any
    pub fn clear(&mut self) {
        self.holder = None;
    }

    fn install(&mut self, holder: Box<dyn Holder>) {
        if let Some(previous) = self.type_key() {
            let next = holder.type_key();
            if previous != next {
                trace!("Variant type changed from {} to {}", previous, next);
            }
        }
        self.holder = Some(holder);
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        Self {
            holder: self.holder.as_deref().map(|holder| holder.clone_holder()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.holder = source.holder.as_deref().map(|holder| holder.clone_holder());
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.type_name() {
            Some(name) => write!(f, "Variant({})", name),
            None => f.write_str("Variant(<empty>)"),
        }
    }
}

/// Builds a `T` from `args` and wraps it in a Variant
///
/// Several arguments are passed as a tuple, so `T` needs a `From` impl for that tuple.
///
/// ```
/// use sovran_variant::{make_variant, Variant};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl From<(i32, i32)> for Point {
///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
/// }
///
/// let v = make_variant::<Point, _>((1, 2));
/// assert_eq!(v.value::<Point>(), &Point { x: 1, y: 2 });
/// ```
pub fn make_variant<T, A>(args: A) -> Variant
where
    T: Canonical + From<A>,
{
    Variant::with_value(T::from(args))
}
