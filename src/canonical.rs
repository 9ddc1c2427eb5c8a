use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Types that can be stored in a [`Variant`](crate::Variant)
///
/// The canonical storage type is always the owned, `'static` form of a type. Call sites that
/// only have a borrow (`&T`) copy into it, call sites that own the value move into it, so both
/// address the same stored value.
pub trait Canonical: Any + Clone + Send + Sync {}

impl<T: Any + Clone + Send + Sync> Canonical for T {}

/// Read-only reference to a stored value, as handed out by retrieval
pub type ConstRef<'a, T> = &'a T;

/// Mutable reference to a stored value
pub type MutRef<'a, T> = &'a mut T;

/// Runtime identity of a canonical type
///
/// Equality and hashing only consider the `TypeId`; the name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of `T`
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human readable type name, not guaranteed stable across compiler versions
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this is the key of `T`
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}
