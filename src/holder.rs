use crate::canonical::{Canonical, TypeKey};
use std::any::Any;

/// Ownership of one value whose type only the implementor knows
///
/// The one semantic capability is producing an independent deep copy; the rest is the
/// plumbing needed to check and recover the concrete type.
pub(crate) trait Holder: Any + Send + Sync {
    /// Create a new, independently owned holder with a clone of this one's value
    fn clone_holder(&self) -> Box<dyn Holder>;

    /// The canonical type of the held value
    fn type_key(&self) -> TypeKey;

    /// The holder itself as `Any`, for downcasting back to `ValueHolder<T>`
    fn as_any(&self) -> &dyn Any;
}

/// The holder for a single canonical type `T`
pub(crate) struct ValueHolder<T: Canonical> {
    pub(crate) value: T,
}

impl<T: Canonical> ValueHolder<T> {
    pub(crate) fn new(value: impl Into<T>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub(crate) fn boxed(value: impl Into<T>) -> Box<dyn Holder> {
        Box::new(Self::new(value))
    }
}

impl<T: Canonical> Holder for ValueHolder<T> {
    fn clone_holder(&self) -> Box<dyn Holder> {
        Box::new(ValueHolder::<T> {
            value: self.value.clone(),
        })
    }

    fn type_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Holder {
    /// Get a reference to the held value if it is of type T
    pub(crate) fn downcast_ref<T: Canonical>(&self) -> Option<&T> {
        self.as_any()
            .downcast_ref::<ValueHolder<T>>()
            .map(|holder| &holder.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Counted {
        clones: Arc<AtomicUsize>,
        drops: Arc<AtomicUsize>,
    }

    impl Clone for Counted {
        fn clone(&self) -> Self {
            self.clones.fetch_add(1, Ordering::SeqCst);
            Self {
                clones: Arc::clone(&self.clones),
                drops: Arc::clone(&self.drops),
            }
        }
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_clone_holder_is_deep() {
        let holder = ValueHolder::<Vec<i32>>::boxed(vec![1, 2, 3]);
        let copy = holder.clone_holder();

        assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        let original_ptr = holder.downcast_ref::<Vec<i32>>().map(|v| v.as_ptr());
        let copy_ptr = copy.downcast_ref::<Vec<i32>>().map(|v| v.as_ptr());
        assert_ne!(original_ptr, copy_ptr);
    }

    #[test]
    fn test_type_key_and_downcast() {
        let holder = ValueHolder::<String>::boxed("hello");
        assert_eq!(holder.type_key(), TypeKey::of::<String>());
        assert_eq!(holder.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert!(holder.downcast_ref::<&'static str>().is_none());
    }

    #[test]
    fn test_new_moves_argument() {
        let clones = Arc::new(AtomicUsize::new(0));
        let drops = Arc::new(AtomicUsize::new(0));
        let value = Counted {
            clones: Arc::clone(&clones),
            drops: Arc::clone(&drops),
        };

        let holder = ValueHolder::<Counted>::boxed(value);
        assert_eq!(clones.load(Ordering::SeqCst), 0);

        let copy = holder.clone_holder();
        assert_eq!(clones.load(Ordering::SeqCst), 1);

        drop(holder);
        drop(copy);
        assert_eq!(drops.load(Ordering::SeqCst), 2);
    }
}
